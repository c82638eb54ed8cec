//! End-to-end rendering over the shared sample model.

use std::io::Write;

use ilview::emit::{SHOW_MODULE_BODY, default_unsupported};
use ilview::model::*;
use ilview::{EmitOptions, Emitter, Root, TextFormatter, render_many, render_to_string};

use crate::helpers::model_fixtures::SAMPLE;
use crate::helpers::node_samples::{sample_expression, sample_statement};

const MARKER: &str = "/* unsupported ";

/// Rendered text and the number of degraded nodes.
fn render_counted(root: Root) -> (String, usize) {
    let mut emitter = Emitter::new(&SAMPLE.model, EmitOptions::default(), TextFormatter::new());
    emitter.emit(&root).unwrap();
    let degraded = emitter.degraded();
    (emitter.into_formatter().into_string(), degraded)
}

// ============================================================================
// DEGRADATION
// ============================================================================

#[test]
fn test_statement_kinds_degrade_only_when_unsupported() {
    let unsupported = default_unsupported();
    for &kind in StatementKind::ALL {
        let (text, degraded) = render_counted(Root::Statement(sample_statement(kind)));
        let expected = usize::from(unsupported.contains(&kind.into()));
        assert_eq!(degraded, expected, "{kind}: {text}");
        assert_eq!(text.matches(MARKER).count(), expected, "{kind}: {text}");
        if expected == 1 {
            assert!(text.contains(kind.as_str()), "{kind}: {text}");
        }
    }
}

#[test]
fn test_expression_kinds_degrade_only_when_unsupported() {
    let unsupported = default_unsupported();
    for &kind in ExpressionKind::ALL {
        let (text, degraded) = render_counted(Root::Expression(sample_expression(kind)));
        let expected = usize::from(unsupported.contains(&kind.into()));
        assert_eq!(degraded, expected, "{kind}: {text}");
        assert_eq!(text.matches(MARKER).count(), expected, "{kind}: {text}");
        assert!(!text.is_empty(), "{kind}");
    }
}

#[test]
fn test_empty_unsupported_set_renders_everything() {
    let options = EmitOptions::default().with_unsupported(Vec::new());
    for &kind in ExpressionKind::ALL {
        let text = render_to_string(&SAMPLE.model, &Root::Expression(sample_expression(kind)), &options)
            .unwrap();
        assert!(!text.contains(MARKER), "{kind}: {text}");
    }
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[test]
fn test_full_type_declaration() {
    let text = render_to_string(&SAMPLE.model, &Root::Type(SAMPLE.widget), &EmitOptions::full()).unwrap();
    assert!(text.starts_with("public class Widget\n{\n"), "{text}");
    assert!(text.contains("    public static int Instances;\n"), "{text}");
    assert!(text.contains("    private int count;\n"), "{text}");
    assert!(text.contains("    internal static void Reset()\n"), "{text}");
    assert!(text.contains("        return this.count;\n"), "{text}");
    assert!(text.contains("    public int Size { get; }\n"), "{text}");
    assert!(text.contains("    public event EventHandler Changed;\n"), "{text}");
    assert!(!text.contains("get_Size"), "{text}");
    assert!(!text.contains("add_Changed"), "{text}");
    assert!(text.ends_with("}\n"), "{text}");

    let fields = text.find("Instances").unwrap();
    let methods = text.find("Reset").unwrap();
    let properties = text.find("Size").unwrap();
    let events = text.find("Changed").unwrap();
    assert!(fields < methods && methods < properties && properties < events);
}

#[test]
fn test_module_header_reads_file_size() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"MZ\x90\x00\x03").unwrap();
    file.flush().unwrap();

    let mut builder = ModelBuilder::new();
    let assembly = builder.add_assembly(Assembly::new("Sized", Version::new(1, 0, 0, 0)));
    let module = builder.add_module(Module::new("Sized.dll", assembly).with_location(file.path()));
    let model = builder.build();

    let text = render_to_string(&model, &Root::Module(module), &EmitOptions::default()).unwrap();
    assert!(text.starts_with("// Module Sized.dll\n"), "{text}");
    assert!(text.contains("// Size: 5 bytes\n"), "{text}");
    assert!(text.contains("// Types: 0\n"), "{text}");
}

#[test]
fn test_module_header_skips_size_of_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("Gone.dll");

    let mut builder = ModelBuilder::new();
    let assembly = builder.add_assembly(Assembly::new("Gone", Version::new(1, 0, 0, 0)));
    let module = builder.add_module(Module::new("Gone.dll", assembly).with_location(&missing));
    let model = builder.build();

    let text = render_to_string(&model, &Root::Module(module), &EmitOptions::default()).unwrap();
    assert!(text.contains("// Location: "), "{text}");
    assert!(!text.contains("// Size: "), "{text}");
}

#[test]
fn test_module_body_groups_namespaces() {
    let options = EmitOptions::default().with_flag(SHOW_MODULE_BODY, true);
    let text = render_to_string(&SAMPLE.model, &Root::Module(SAMPLE.module), &options).unwrap();
    let demo = text.find("// Namespace Demo\n").unwrap();
    let internal = text.find("// Namespace Demo.Internal\n").unwrap();
    assert!(demo < internal, "{text}");
}

// ============================================================================
// PARALLEL RENDERING
// ============================================================================

#[test]
fn test_repeated_rendering_is_byte_identical() {
    let options = EmitOptions::full();
    let root = Root::Assembly(SAMPLE.assembly);
    let first = render_to_string(&SAMPLE.model, &root, &options).unwrap();
    for _ in 0..3 {
        assert_eq!(render_to_string(&SAMPLE.model, &root, &options).unwrap(), first);
    }
}

#[test]
fn test_render_many_matches_sequential_rendering() {
    let roots = vec![
        Root::Assembly(SAMPLE.assembly),
        Root::Module(SAMPLE.module),
        Root::Type(SAMPLE.widget),
        Root::Type(SAMPLE.helper),
        Root::Method(SAMPLE.run),
        Root::Property(SAMPLE.size),
        Root::Event(SAMPLE.changed),
        Root::Field(SAMPLE.count),
        Root::Statement(sample_statement(StatementKind::TryCatchFinally)),
    ];
    let options = EmitOptions::full();

    let parallel = render_many(&SAMPLE.model, &roots, &options);
    assert_eq!(parallel.len(), roots.len());
    for (root, result) in roots.iter().zip(parallel) {
        let sequential = render_to_string(&SAMPLE.model, root, &options).unwrap();
        assert_eq!(result.unwrap(), sequential);
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn test_options_from_host_json() {
    use ilview::VisibilityPolicy;
    use ilview::emit::SHOW_TYPE_DECLARATION_BODY;

    let json = r#"{
        "flags": { "ShowTypeDeclarationBody": true },
        "visibility": { "public": true }
    }"#;
    let options: EmitOptions = serde_json::from_str(json).unwrap();
    assert!(options.flag(SHOW_TYPE_DECLARATION_BODY));
    assert!(!options.flag(SHOW_MODULE_BODY));
    assert_eq!(options.visibility(), Some(&VisibilityPolicy::public_only()));
    assert_eq!(options.unsupported, default_unsupported());

    let text = render_to_string(&SAMPLE.model, &Root::Type(SAMPLE.widget), &options).unwrap();
    assert!(!text.contains("count"), "{text}");
    assert!(text.contains("Instances"), "{text}");
}
