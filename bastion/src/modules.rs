use bastion_server::Module;

/// Module mount table, nested under the configured API prefix
///
/// Each entry pairs a path prefix such as `/users` with the module's router.
pub fn registry() -> Vec<Module> {
    Vec::new()
}
