use placement_core::{SceneSink, TokenSpawn};
use std::io::Write;

/// Scene that writes each token as one JSON line
pub struct JsonLinesScene<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesScene<W> {
    pub fn new(writer: W) -> Self {
        JsonLinesScene { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SceneSink for JsonLinesScene<W> {
    type Error = serde_json::Error;

    fn spawn(&mut self, token: &TokenSpawn) -> Result<(), Self::Error> {
        serde_json::to_writer(&mut self.writer, token)?;
        self.writer.write_all(b"\n").map_err(serde_json::Error::io)
    }
}
