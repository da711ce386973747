//! Headless shell driver.
//!
//! Boots the shell against the local file store and decides the navigations
//! given as process arguments, logging each outcome. This stands in for the
//! rendering layer, which is out of scope for the shell.

use parkshell::Shell;
use parkshell_router::Decision;
use parkshell_storage::FileStore;

fn main() -> anyhow::Result<()> {
    let store = match std::env::var("PARKSHELL_DATA_DIR") {
        Ok(dir) => FileStore::new(dir),
        Err(_) => FileStore::open_default()?,
    };

    let shell = Shell::boot(store);

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        tracing::info!("no navigation targets given; try: parkshell /user-dashboard");
        return Ok(());
    }

    for path in &paths {
        match shell.navigate(path) {
            Decision::Allow => tracing::info!(%path, "allow"),
            Decision::Redirect(target) => tracing::info!(%path, target, "redirect"),
        }
    }

    Ok(())
}
