//! Resolver queries over the shared sample model.

use ilview::model::MemberVisibility;
use ilview::{Resolver, VisibilityPolicy};

use crate::helpers::model_fixtures::SAMPLE;

#[test]
fn test_namespaces_are_grouped_and_ordered() {
    let resolver = Resolver::new(&SAMPLE.model);
    let namespaces = resolver.namespaces(SAMPLE.module).unwrap();
    let names: Vec<_> = namespaces.iter().map(|ns| ns.name.as_str()).collect();
    assert_eq!(names, ["Demo", "Demo.Internal"]);
    assert_eq!(namespaces[0].types, [SAMPLE.widget]);
    assert_eq!(namespaces[1].types, [SAMPLE.helper]);
}

#[test]
fn test_methods_exclude_accessors_and_sort_by_name() {
    let resolver = Resolver::new(&SAMPLE.model);
    let methods = resolver.methods(SAMPLE.widget, None).unwrap();
    assert_eq!(methods, [SAMPLE.reset, SAMPLE.run]);
}

#[test]
fn test_fields_sort_by_ordinal_name() {
    let resolver = Resolver::new(&SAMPLE.model);
    let fields = resolver.fields(SAMPLE.widget, None).unwrap();
    assert_eq!(fields, [SAMPLE.instances, SAMPLE.count]);
}

#[test]
fn test_public_policy_filters_members_and_types() {
    let resolver = Resolver::new(&SAMPLE.model);
    let policy = VisibilityPolicy::public_only();
    assert_eq!(resolver.methods(SAMPLE.widget, Some(&policy)).unwrap(), [SAMPLE.run]);
    assert_eq!(resolver.fields(SAMPLE.widget, Some(&policy)).unwrap(), [SAMPLE.instances]);
    assert!(resolver.is_type_visible(SAMPLE.widget, &policy).unwrap());
    assert!(!resolver.is_type_visible(SAMPLE.helper, &policy).unwrap());
}

#[test]
fn test_accessor_visibility_carries_over() {
    let resolver = Resolver::new(&SAMPLE.model);
    assert_eq!(resolver.property_visibility(SAMPLE.size).unwrap(), MemberVisibility::Public);
    assert_eq!(resolver.event_visibility(SAMPLE.changed).unwrap(), MemberVisibility::Public);
}

#[test]
fn test_display_names() {
    let resolver = Resolver::new(&SAMPLE.model);
    assert_eq!(resolver.qualified_name(SAMPLE.widget).unwrap(), "Demo.Widget");
    assert_eq!(resolver.name_with_parameter_list(SAMPLE.run).unwrap(), "Run()");
    assert_eq!(
        resolver.name_with_declaring_type(SAMPLE.widget, "count").unwrap(),
        "Demo.Widget.count"
    );
}
