//! Workforce introspection demonstration
//!
//! Builds a small object model with multiple inheritance (a sales person
//! is both an employee and a singer), instantiates it, and prints what the
//! instance exposes:
//! - every resolvable member, in the stable enumeration order
//! - the data attributes with their values
//! - the user-facing callable members
//! - a few capability queries against the instance

use classmodel_core::error::Result;
use classmodel_core::types::{MemberDescriptor, TypeDefinition};
use classmodel_service::model_view::{ModelView, TypeGraph};
use serde_json::json;

fn main() -> Result<()> {
    let mut graph = TypeGraph::new();

    let mut employee = TypeDefinition::new("Employee");
    employee.declare(MemberDescriptor::data_with_default(
        "company",
        json!("Dunder Mifflin"),
    ));
    employee.declare(MemberDescriptor::data_with_default("salary", json!(0.0)));
    employee.declare(MemberDescriptor::callable(
        "promote",
        vec!["salary_raise".to_string()],
    ));
    graph.register(employee)?;

    let mut singer = TypeDefinition::new("Singer");
    singer.declare(MemberDescriptor::data_with_default(
        "instrument",
        json!("Banjo"),
    ));
    graph.register(singer)?;

    let mut sales_person = TypeDefinition::new("SalesPerson");
    sales_person.parents = vec!["Employee".to_string(), "Singer".to_string()];
    graph.register(sales_person)?;

    let view = ModelView::new(graph);
    let mut sales_person = view.instantiate("SalesPerson")?;

    // A promotion is an attribute assignment on the instance.
    sales_person.set_attribute("salary", json!(500.0));

    println!("Resolution order {:?}", view.resolution_order("SalesPerson")?);
    println!("Everything available {:?}", view.list_all(&sales_person)?);
    println!(
        "All the properties {:?}",
        view.list_data_attributes(&sales_person)
    );
    println!(
        "All the methods {:?}",
        view.list_callable_members(&sales_person)?
    );

    for capability in ["promote", "instrument", "juggle"] {
        println!(
            "supports({capability}) = {}",
            view.supports(&sales_person, capability)
        );
    }

    let resolved = view.resolve(&sales_person, "instrument")?;
    println!(
        "'{}' supplied by '{}' = {:?}",
        resolved.name, resolved.supplied_by, resolved.value
    );

    Ok(())
}
