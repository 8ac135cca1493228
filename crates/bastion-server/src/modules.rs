use std::collections::HashSet;

use axum::Router;

/// A module's router and the prefix it is mounted under
///
/// Mounts are resolved once, when the server is built. Every module prefix
/// is nested below the configured API prefix.
pub struct Module {
    prefix: String,
    router: Router,
}

impl Module {
    pub fn new(prefix: impl Into<String>, router: Router) -> Self {
        Self {
            prefix: prefix.into(),
            router,
        }
    }
}

/// Nest every module router under its prefix
///
/// Returns `None` when there are no modules to mount.
///
/// # Errors
///
/// Returns an error if a prefix is not rooted, ends with `/`, or is
/// mounted twice
pub fn compose(modules: Vec<Module>) -> anyhow::Result<Option<Router>> {
    if modules.is_empty() {
        return Ok(None);
    }

    let mut seen = HashSet::new();
    let mut api = Router::new();

    for module in modules {
        let prefix = module.prefix;

        if !prefix.starts_with('/') || prefix.ends_with('/') {
            anyhow::bail!("module prefix must start with '/' and must not end with '/': `{prefix}`");
        }

        if !seen.insert(prefix.clone()) {
            anyhow::bail!("module prefix mounted twice: `{prefix}`");
        }

        tracing::debug!(%prefix, "mounting module");
        api = api.nest(&prefix, module.router);
    }

    Ok(Some(api))
}
