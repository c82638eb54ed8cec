use super::*;

fn corlib(builder: &mut ModelBuilder) -> (AssemblyId, ModuleId) {
    let assembly = builder.add_assembly(Assembly::new("Sample", Version::new(1, 2, 0, 0)));
    let module = builder.add_module(Module::new("Sample.dll", assembly));
    (assembly, module)
}

#[test]
fn test_ids_display_with_label() {
    assert_eq!(TypeId::new(3).to_string(), "type#3");
    assert_eq!(AssemblyRefId::new(0).to_string(), "assembly-ref#0");
    assert_eq!(MethodId::new(12).raw(), 12);
}

#[test]
fn test_kind_tags_are_exhaustive() {
    assert_eq!(StatementKind::ALL.len(), 24);
    assert_eq!(ExpressionKind::ALL.len(), 45);
    assert_eq!(TypeKind::ALL.len(), 8);
    assert_eq!(
        NodeKind::from(ExpressionKind::AddressOf).to_string(),
        "AddressOfExpression"
    );
}

#[test]
fn test_builder_registers_types_with_module_and_owner() {
    let mut builder = ModelBuilder::new();
    let (assembly, module) = corlib(&mut builder);

    let outer = builder.define_type(
        TypeRef::new("Outer", Owner::Module(module)).with_namespace("Demo"),
        TypeDecl::new(TypeVisibility::Public),
    );
    let inner = builder.define_type(
        TypeRef::new("Inner", Owner::Type(outer)),
        TypeDecl::new(TypeVisibility::NestedPrivate),
    );
    let model = builder.build();

    assert_eq!(model.assembly(assembly).unwrap().modules, vec![module]);
    assert_eq!(model.module(module).unwrap().types, vec![outer]);
    assert_eq!(
        model.type_decl(outer).unwrap().unwrap().nested_types,
        vec![inner]
    );
}

#[test]
fn test_builder_registers_members_in_declaration_order() {
    let mut builder = ModelBuilder::new();
    let (_, module) = corlib(&mut builder);
    let int32 = builder.add_type(TypeRef::new("Int32", Owner::Module(module)).with_namespace("System"));
    let host = builder.define_type(
        TypeRef::new("Host", Owner::Module(module)),
        TypeDecl::new(TypeVisibility::Public),
    );

    let b = builder.define_field(
        FieldRef::new("b", host, int32),
        FieldDecl::new(MemberVisibility::Private),
    );
    let a = builder.define_field(
        FieldRef::new("a", host, int32),
        FieldDecl::new(MemberVisibility::Private),
    );
    let external = builder.add_method(MethodRef::new("Run", int32, int32));
    let model = builder.build();

    let decl = model.type_decl(host).unwrap().unwrap();
    assert_eq!(decl.fields, vec![b, a]);
    assert!(decl.methods.is_empty());
    assert!(model.method_decl(external).unwrap().is_none());
}

#[test]
fn test_external_type_has_no_declaration() {
    let mut builder = ModelBuilder::new();
    let mscorlib = builder.add_assembly_ref(AssemblyRef::new("mscorlib", Version::new(4, 0, 0, 0)));
    let object = builder.add_type(TypeRef::new("Object", Owner::Assembly(mscorlib)).with_namespace("System"));
    let model = builder.build();

    assert_eq!(model.type_ref(object).unwrap().name, "Object");
    assert_eq!(model.type_decl(object).unwrap(), None);
}

#[test]
fn test_dangling_ids_report_kind_and_index() {
    let model = ModelBuilder::new().build();

    let err = model.type_ref(TypeId::new(7)).unwrap_err();
    assert_eq!(err, ModelError::dangling(EntityKind::Type, 7));
    assert_eq!(err.to_string(), "dangling type id #7");

    let err = model.assembly_ref(AssemblyRefId::new(1)).unwrap_err();
    assert_eq!(err.to_string(), "dangling assembly reference id #1");
}

#[test]
fn test_builder_skips_unknown_containers() {
    let mut builder = ModelBuilder::new();
    let orphan = builder.add_module(Module::new("Orphan.dll", AssemblyId::new(4)));
    let model = builder.build();

    assert!(model.module(orphan).is_ok());
    assert_eq!(model.assemblies().count(), 0);
}

#[test]
fn test_assembly_full_name() {
    let assembly = Assembly::new("Sample", Version::new(1, 2, 3, 4)).with_public_key_token("b77a5c561934e089");
    assert_eq!(
        assembly.full_name(),
        "Sample, Version=1.2.3.4, Culture=neutral, PublicKeyToken=b77a5c561934e089"
    );
}

#[test]
fn test_expression_and_statement_kinds() {
    let call = Expression::call(Some(Expression::this()), MethodId::new(0), vec![]);
    assert_eq!(call.kind(), ExpressionKind::MethodInvoke);
    assert_eq!(Statement::expression(call).kind(), StatementKind::Expression);
    assert_eq!(Statement::ret(None).kind(), StatementKind::MethodReturn);
    assert_eq!(Expression::literal(4).kind(), ExpressionKind::Literal);
}
