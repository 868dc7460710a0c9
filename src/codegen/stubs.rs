//! `object_functions<T>` header templates.

use super::catalog::Catalog;
use super::writer::CodeWriter;

/// Primary template. Using `object_functions<T>` without including the
/// header for `T` trips its `static_assert`.
pub const DEFAULT_HEADER: &str = "\
#pragma once

#include <clean-core/always_false.hh>

template <class T>
struct object_functions
{
    static_assert(cc::always_false<T>
    , \"include missing\");
};
";

const NOT_IMPLEMENTED: &str = "TODO: not yet implemented";

/// Render the specialization header for one object type.
///
/// `include` is the path of the default header as written in the
/// `#include <...>` directive.
pub fn object_functions_header(ty: &str, catalog: &Catalog, include: &str) -> String {
    let mut w = CodeWriter::new();
    w.line("#pragma once");
    w.blank();
    w.line(&format!("#include <{}>", include));
    w.blank();
    w.line("template <int D, class ScalarT>");
    w.line(&format!("struct object_functions<{}<D, ScalarT>>", ty));
    w.line("{");
    w.indent();

    for function in &catalog.functions.unary {
        unary_stub(&mut w, function, ty);
        w.blank();
    }

    // Full cross product: (A, A) and both (A, B) and (B, A) are kept.
    for function in &catalog.functions.binary_symmetric {
        for other in catalog.partner_types() {
            binary_stub(&mut w, function, ty, other);
            w.blank();
        }
    }
    for function in &catalog.functions.binary_asymmetric {
        for other in catalog.partner_types() {
            binary_stub(&mut w, function, ty, other);
            w.blank();
        }
    }

    w.unindent();
    w.line("};");
    w.finish()
}

fn unary_stub(w: &mut CodeWriter, function: &str, ty: &str) {
    w.line(&format!(
        "static constexpr auto {}({}<D, ScalarT> const& obj)",
        function, ty
    ));
    w.line("{");
    w.indent();
    w.line(&format!(
        "static_assert(cc::always_false<{}<D, ScalarT>>, \"{}\");",
        ty, NOT_IMPLEMENTED
    ));
    w.unindent();
    w.line("}");
}

fn binary_stub(w: &mut CodeWriter, function: &str, type_a: &str, type_b: &str) {
    w.line(&format!(
        "static constexpr auto {}({}<D, ScalarT> const& a, {}<D, ScalarT> const& b)",
        function, type_a, type_b
    ));
    w.line("{");
    w.indent();
    w.line(&format!(
        "static_assert(cc::always_false<{}<D, ScalarT>,{}<D, ScalarT>>, \"{}\");",
        type_a, type_b, NOT_IMPLEMENTED
    ));
    w.unindent();
    w.line("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::catalog::{FunctionCatalog, TypeCatalog};

    fn small_catalog() -> Catalog {
        Catalog {
            types: TypeCatalog {
                common: vec!["pos".into(), "aabb".into()],
                advanced: vec!["box".into()],
            },
            functions: FunctionCatalog {
                unary: vec!["volume".into()],
                binary_symmetric: vec!["distance".into()],
                binary_asymmetric: vec!["contains".into()],
            },
        }
    }

    #[test]
    fn unary_only_header_is_exact() {
        let catalog = Catalog {
            types: TypeCatalog {
                common: vec!["seg".into()],
                advanced: Vec::new(),
            },
            functions: FunctionCatalog {
                unary: vec!["centroid".into()],
                ..Default::default()
            },
        };
        let out = object_functions_header("seg", &catalog, "typed-geometry/object_functions.hh");
        let expected = "\
#pragma once

#include <typed-geometry/object_functions.hh>

template <int D, class ScalarT>
struct object_functions<seg<D, ScalarT>>
{
    static constexpr auto centroid(seg<D, ScalarT> const& obj)
    {
        static_assert(cc::always_false<seg<D, ScalarT>>, \"TODO: not yet implemented\");
    }

};
";
        assert_eq!(out, expected);
    }

    #[test]
    fn binary_stubs_cover_every_partner() {
        let out = object_functions_header("aabb", &small_catalog(), "of.hh");
        for other in ["pos", "aabb", "box"] {
            let sig = format!(
                "static constexpr auto distance(aabb<D, ScalarT> const& a, {}<D, ScalarT> const& b)",
                other
            );
            assert!(out.contains(&sig), "missing {sig} in:\n{out}");
        }
        assert!(out.contains(
            "static_assert(cc::always_false<aabb<D, ScalarT>,box<D, ScalarT>>, \"TODO: not yet implemented\");"
        ));
    }

    #[test]
    fn stub_count_is_cross_product() {
        let out = object_functions_header("pos", &small_catalog(), "of.hh");
        // 1 unary + (1 symmetric + 1 asymmetric) * 3 partners
        assert_eq!(out.matches("static constexpr auto").count(), 7);
        assert_eq!(out.matches("const& obj)").count(), 1);
    }

    #[test]
    fn deterministic() {
        let catalog = Catalog::default();
        let a = object_functions_header("sphere", &catalog, "of.hh");
        let b = object_functions_header("sphere", &catalog, "of.hh");
        assert_eq!(a, b);
    }

    #[test]
    fn default_header_declares_primary_template() {
        assert!(DEFAULT_HEADER.contains("struct object_functions\n{"));
        assert!(DEFAULT_HEADER.ends_with("};\n"));
    }
}
