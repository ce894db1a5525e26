//! Scene deployment - resolve a plan into tokens and hand them to the scene

use crate::plan::PlacementPlan;
use crate::DeployError;
use bestiary_core::{EntityKind, EntitySource, ImageRewrite};
use serde::Serialize;
use std::convert::Infallible;
use tracing::{info, warn};

/// Token attitude toward the party
///
/// Serialized as the numeric value scene documents store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(into = "i8")]
pub enum Disposition {
    #[default]
    Hostile,
    Neutral,
    Friendly,
}

impl Disposition {
    /// Numeric disposition as scene documents store it
    pub fn value(&self) -> i8 {
        match self {
            Disposition::Hostile => -1,
            Disposition::Neutral => 0,
            Disposition::Friendly => 1,
        }
    }
}

impl From<Disposition> for i8 {
    fn from(disposition: Disposition) -> Self {
        disposition.value()
    }
}

impl From<EntityKind> for Disposition {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Character => Disposition::Friendly,
            EntityKind::Monster => Disposition::Hostile,
        }
    }
}

/// A token ready to be created on the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenSpawn {
    pub template_id: String,
    /// Name of the token and of its backing actor
    pub name: String,
    pub image: String,
    pub x: f64,
    pub y: f64,
    pub disposition: Disposition,
    /// Token is linked to a freshly created actor rather than the template
    pub actor_link: bool,
}

/// Receives tokens in plan order
pub trait SceneSink {
    type Error: std::error::Error + 'static;

    fn spawn(&mut self, token: &TokenSpawn) -> Result<(), Self::Error>;
}

impl SceneSink for Vec<TokenSpawn> {
    type Error = Infallible;

    fn spawn(&mut self, token: &TokenSpawn) -> Result<(), Self::Error> {
        self.push(token.clone());
        Ok(())
    }
}

/// Outcome of a deployment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeployReport {
    pub spawned: usize,
    /// Plan entries whose template could not be resolved
    pub skipped: usize,
}

/// Resolve every plan entry and hand it to the sink
///
/// Entries whose template is missing from `source` are skipped. The first sink
/// error aborts the deployment; tokens already handed over stay on the scene.
pub fn deploy<S, K>(
    plan: &PlacementPlan,
    source: &S,
    rewrite: &ImageRewrite,
    sink: &mut K,
) -> Result<DeployReport, DeployError<K::Error>>
where
    S: EntitySource + ?Sized,
    K: SceneSink + ?Sized,
{
    let mut report = DeployReport::default();

    for placement in plan.iter() {
        let Some(record) = source.entity(&placement.template_id) else {
            warn!(template_id = %placement.template_id, "template vanished, skipping token");
            report.skipped += 1;
            continue;
        };

        let token = TokenSpawn {
            template_id: placement.template_id.clone(),
            name: placement.instance_label.clone(),
            image: record.token_image(rewrite),
            x: placement.x,
            y: placement.y,
            disposition: record.kind.into(),
            actor_link: true,
        };

        sink.spawn(&token).map_err(|e| DeployError::Sink {
            name: token.name.clone(),
            source: e,
        })?;
        report.spawned += 1;
    }

    info!(
        spawned = report.spawned,
        skipped = report.skipped,
        "deployed placement plan"
    );
    Ok(report)
}
