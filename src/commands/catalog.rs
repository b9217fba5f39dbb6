use crate::catalog::{Catalog, NamedTemplate};

pub fn run(catalog: &Catalog) -> Vec<NamedTemplate> {
    catalog.entries()
}
