//! Module descriptors.
//!
//! A module groups the repository, service and controller of one feature and
//! names the modules it needs. The application composition root lists every
//! registered module in a single `IMPORTS` slice.

/// Describes one unit of application wiring.
pub trait Module: Sync {
    /// Stable, unique module name
    fn name(&self) -> &'static str;

    /// Modules that must be available before this one
    fn imports(&self) -> &'static [&'static dyn Module] {
        &[]
    }
}

/// Hosts the [`Store`](crate::Store). Every generated feature module imports it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoreModule;

impl Module for StoreModule {
    fn name(&self) -> &'static str {
        "store"
    }
}

/// Names of `roots` and everything they import, dependencies first.
///
/// Each module appears once, at the position of its first dependent.
pub fn load_order(roots: &[&dyn Module]) -> Vec<&'static str> {
    let mut order = vec![];
    let mut visiting = vec![];

    for root in roots {
        visit(*root, &mut visiting, &mut order);
    }

    order
}

fn visit(module: &dyn Module, visiting: &mut Vec<&'static str>, order: &mut Vec<&'static str>) {
    let name = module.name();

    // Already placed, or an import cycle back to a module being visited
    if order.contains(&name) || visiting.contains(&name) {
        return;
    }

    visiting.push(name);

    for import in module.imports() {
        visit(*import, visiting, order);
    }

    visiting.pop();
    order.push(name);
}
