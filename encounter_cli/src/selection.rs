use bestiary_core::parse_count;

/// Split an `ID[:COUNT]` argument
///
/// The count follows the same lenient rules as a quantity field, so
/// `wolf:abc` and `wolf:0` both mean one wolf.
pub fn parse_selection(arg: &str) -> (String, u32) {
    match arg.split_once(':') {
        Some((id, count)) => (id.trim().to_string(), parse_count(Some(count))),
        None => (arg.trim().to_string(), 1),
    }
}
