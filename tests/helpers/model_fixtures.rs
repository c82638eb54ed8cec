//! A small program model shared by the integration tests.

use ilview::model::*;
use once_cell::sync::Lazy;

/// Ids of the interesting entities in [`SAMPLE`].
pub struct Sample {
    pub model: Model,
    pub assembly: AssemblyId,
    pub module: ModuleId,
    pub int32: TypeId,
    pub handler: TypeId,
    pub widget: TypeId,
    pub helper: TypeId,
    pub count: FieldId,
    pub instances: FieldId,
    pub run: MethodId,
    pub reset: MethodId,
    pub size: PropertyId,
    pub changed: EventId,
}

/// Built once; the model is immutable after construction.
pub static SAMPLE: Lazy<Sample> = Lazy::new(build_sample);

fn build_sample() -> Sample {
    let mut builder = ModelBuilder::new();
    let assembly = builder.add_assembly(Assembly::new("Sample", Version::new(1, 2, 0, 0)));
    let module = builder.add_module(Module::new("Sample.dll", assembly));
    let corlib =
        builder.reference_assembly(assembly, AssemblyRef::new("mscorlib", Version::new(4, 0, 0, 0)));

    let mut system = |name: &str| {
        builder.add_type(TypeRef::new(name, Owner::Assembly(corlib)).with_namespace("System"))
    };
    let object = system("Object");
    let int32 = system("Int32");
    let void = system("Void");
    let handler = system("EventHandler");

    let widget = builder.define_type(
        TypeRef::new("Widget", Owner::Module(module)).with_namespace("Demo"),
        TypeDecl::new(TypeVisibility::Public).with_base_type(object),
    );
    let helper = builder.define_type(
        TypeRef::new("Helper", Owner::Module(module)).with_namespace("Demo.Internal"),
        TypeDecl::new(TypeVisibility::Private).with_base_type(object),
    );

    let count = builder.define_field(
        FieldRef::new("count", widget, int32),
        FieldDecl::new(MemberVisibility::Private),
    );
    let instances = builder.define_field(
        FieldRef::new("Instances", widget, int32),
        FieldDecl::new(MemberVisibility::Public).mark_static(),
    );

    let run_body = BlockStatement::new(vec![Statement::ret(Some(Expression::field(
        Some(Expression::this()),
        count,
    )))]);
    let run = builder.define_method(
        MethodRef::new("Run", widget, int32),
        MethodDecl::new(MemberVisibility::Public).with_body(run_body),
    );
    let reset = builder.define_method(
        MethodRef::new("Reset", widget, void).without_this(),
        MethodDecl::new(MemberVisibility::Assembly)
            .mark_static()
            .with_body(BlockStatement::default()),
    );

    let get_size = builder.define_method(
        MethodRef::new("get_Size", widget, int32),
        MethodDecl::new(MemberVisibility::Public).mark_special_name(),
    );
    let size = builder.define_property(
        PropertyRef::new("Size", widget, int32),
        PropertyDecl::new(Some(get_size), None),
    );

    let mut accessor = |name: &str| {
        builder.define_method(
            MethodRef::new(name, widget, void)
                .with_parameters(vec![ParameterDecl::new("value", handler)]),
            MethodDecl::new(MemberVisibility::Public).mark_special_name(),
        )
    };
    let add = accessor("add_Changed");
    let remove = accessor("remove_Changed");
    let changed = builder.define_event(
        EventRef::new("Changed", widget, handler),
        EventDecl::new(Some(add), Some(remove)),
    );

    Sample {
        model: builder.build(),
        assembly,
        module,
        int32,
        handler,
        widget,
        helper,
        count,
        instances,
        run,
        reset,
        size,
        changed,
    }
}
