use std::path::Path;

use anyhow::Context;
use tracing::{info, info_span, warn};

use stroom_env_common::config::Config;
use stroom_env_core::editor::FsLineEditor;
use stroom_env_core::inventory::AnsibleInventory;
use stroom_env_core::updater::EnvFileUpdater;

pub fn update(stack_path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("update", stack = %stack_path.display());
    let _guard = span.enter();

    let updater = EnvFileUpdater::new(
        Box::new(AnsibleInventory::new(cfg.inventory.clone())),
        Box::new(FsLineEditor),
        cfg.service_group.clone(),
    );

    let report = updater
        .run(stack_path)
        .with_context(|| format!("failed to update HOST_IP for stack {}", stack_path.display()))?;

    if report.removed > 1 {
        warn!("collapsed {} duplicate HOST_IP declarations", report.removed);
    }
    info!("updated {}", report.path.display());

    Ok(())
}
