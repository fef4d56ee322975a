//! Tests for two-strategy type activation

use std::sync::Arc;

use dill::CatalogBuilder;
use migrun_application::{Activator, ExportedType, inject, instantiate};
use migrun_domain::{Error, VersionTableMetaData};

use crate::test_utils::{NamedVersionTable, table_of, version_table_class};

type Capability = dyn VersionTableMetaData;

struct Settings {
    table: String,
}

trait Unrelated: Send + Sync {}

fn injected_only() -> ExportedType {
    ExportedType::class("InjectedOnly", "App").implements::<Capability>(Activator::new().with_injected(
        |catalog| {
            let settings = inject::<Settings>(catalog, "App.InjectedOnly")?;
            Ok(Arc::new(NamedVersionTable::new(settings.table.clone())) as Arc<Capability>)
        },
    ))
}

#[test]
fn test_default_constructor_without_container() {
    let exported = version_table_class("Plain", "App", "Plain");
    let meta = instantiate::<Capability>(&exported, None).expect("default construction");
    assert_eq!(table_of(&meta), "Plain");
}

#[test]
fn test_container_falls_back_to_default_constructor() {
    let catalog = CatalogBuilder::new().build();
    let exported = version_table_class("Plain", "App", "Plain");

    let meta = instantiate::<Capability>(&exported, Some(&catalog)).expect("fallback construction");
    assert_eq!(table_of(&meta), "Plain");
}

#[test]
fn test_injected_constructor_receives_dependencies() {
    let mut builder = CatalogBuilder::new();
    builder.add_value(Settings {
        table: "FromContainer".to_string(),
    });
    let catalog = builder.build();

    let meta = instantiate::<Capability>(&injected_only(), Some(&catalog)).expect("injection");
    assert_eq!(table_of(&meta), "FromContainer");
}

#[test]
fn test_injected_only_type_without_container_fails() {
    let error = instantiate::<Capability>(&injected_only(), None).expect_err("no container");
    match error {
        Error::MissingConstructor { type_name, message } => {
            assert_eq!(type_name, "App.InjectedOnly");
            assert!(message.contains("container"));
        }
        other => panic!("Expected MissingConstructor, got {other:?}"),
    }
}

#[test]
fn test_declared_only_type_has_no_constructor() {
    let exported = ExportedType::class("Bare", "App").declares::<Capability>();
    let error = instantiate::<Capability>(&exported, None).expect_err("no constructor");
    assert!(matches!(error, Error::MissingConstructor { .. }));
}

#[test]
fn test_missing_dependency_is_reported() {
    let catalog = CatalogBuilder::new().build();
    let error = instantiate::<Capability>(&injected_only(), Some(&catalog)).expect_err("unregistered");
    match error {
        Error::UnresolvedDependency {
            type_name,
            dependency,
            ..
        } => {
            assert_eq!(type_name, "App.InjectedOnly");
            assert!(dependency.ends_with("Settings"), "dependency was {dependency}");
        }
        other => panic!("Expected UnresolvedDependency, got {other:?}"),
    }
}

#[test]
fn test_constructor_error_is_returned_unchanged() {
    let exported = ExportedType::class("Broken", "App").implements::<Capability>(
        Activator::new().with_default(|| Err(Error::activation("App.Broken", "boom"))),
    );
    let error = instantiate::<Capability>(&exported, None).expect_err("constructor fails");
    match error {
        Error::Activation { type_name, message, source } => {
            assert_eq!(type_name, "App.Broken");
            assert_eq!(message, "boom");
            assert!(source.is_none());
        }
        other => panic!("Expected Activation, got {other:?}"),
    }
}

#[test]
fn test_unassignable_type_is_rejected() {
    let exported = version_table_class("Plain", "App", "Plain");
    let error = instantiate::<dyn Unrelated>(&exported, None)
        .err()
        .expect("not assignable");
    assert!(matches!(error, Error::NotAssignable { .. }));
}
