//! Object type and operation catalogs driving stub generation.
//!
//! A catalog is plain data: the built-in [`Catalog::default`] mirrors the
//! typed-geometry object set, and [`Catalog::load`] reads the same shape
//! from TOML:
//!
//! ```toml
//! [types]
//! common = ["pos", "aabb"]
//! advanced = ["box"]
//!
//! [functions]
//! unary = ["volume"]
//! binary_symmetric = ["distance"]
//! binary_asymmetric = ["contains"]
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub types: TypeCatalog,
    #[serde(default)]
    pub functions: FunctionCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeCatalog {
    /// Types that get their own header.
    pub common: Vec<String>,
    /// Types that only appear as the second operand of binary stubs.
    #[serde(default)]
    pub advanced: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionCatalog {
    #[serde(default)]
    pub unary: Vec<String>,
    #[serde(default)]
    pub binary_symmetric: Vec<String>,
    #[serde(default)]
    pub binary_asymmetric: Vec<String>,
}

impl Catalog {
    /// Parse and validate a TOML catalog.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Types that get a generated header.
    pub fn generated_types(&self) -> &[String] {
        &self.types.common
    }

    /// Every type a binary stub pairs with: common types, then advanced.
    pub fn partner_types(&self) -> impl Iterator<Item = &String> + '_ {
        self.types.common.iter().chain(self.types.advanced.iter())
    }

    /// Reject names that are not C++ identifiers and duplicates within a
    /// list. Common and advanced types count as one list.
    pub fn validate(&self) -> Result<()> {
        check_list("types", self.partner_types())?;
        check_list("functions.unary", self.functions.unary.iter())?;
        check_list(
            "functions.binary_symmetric",
            self.functions.binary_symmetric.iter(),
        )?;
        check_list(
            "functions.binary_asymmetric",
            self.functions.binary_asymmetric.iter(),
        )?;
        Ok(())
    }
}

fn check_list<'a>(list: &'static str, names: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !RE_IDENTIFIER.is_match(name) {
            return Err(Error::InvalidCatalogName {
                list,
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(Error::DuplicateCatalogName {
                list,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Catalog {
    /// The typed-geometry object catalog.
    fn default() -> Self {
        Self {
            types: TypeCatalog {
                common: names(&[
                    "pos", "ray", "line", "seg", "aabb", "sphere", "triangle", "plane",
                ]),
                advanced: names(&[
                    "aabb_boundary",
                    "box",
                    "box_boundary",
                    "capsule", // 3D only
                    "capsule_boundary", // 3D only
                    "cone",
                    "cone_boundary",
                    "cone_boundary_no_caps",
                    "cylinder",
                    "cylinder_boundary",
                    "cylinder_boundary_no_caps",
                    "ellipse",
                    "ellipse_boundary",
                    "frustum", // 3D only
                    "halfspace",
                    "hemisphere",
                    "hemisphere_boundary",
                    "hemisphere_boundary_no_caps",
                    "inf_cone",
                    "inf_cone_boundary",
                    "inf_cylinder",
                    "inf_cylinder_boundary",
                    "inf_frustum", // 3D only
                    // no planarity guarantee yet
                    "quad",
                    "sphere_boundary",
                    "disk",
                    "disk_boundary",
                ]),
            },
            functions: FunctionCatalog {
                unary: names(&[
                    "edges",
                    "faces",
                    "vertices",
                    "volume",
                    "area",
                    "boundary",
                    "rasterize",
                    "triangulate",
                    "triangulation",
                    "centroid",
                    "aabb_of",
                    "any_point",
                    "project",
                    "signed_distance",
                ]),
                binary_symmetric: names(&[
                    "intersects",
                    "intersection",
                    "closest_points",
                    "distance",
                    "distance_sqr",
                ]),
                binary_asymmetric: names(&[
                    "intersection_parameter",
                    "intersection_parameters",
                    "contains",
                ]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = Catalog::default();
        catalog.validate().unwrap();
        assert_eq!(catalog.generated_types().len(), 8);
        assert_eq!(catalog.partner_types().count(), 35);
        assert_eq!(catalog.functions.unary.len(), 14);
    }

    #[test]
    fn parses_toml() {
        let catalog = Catalog::from_toml_str(
            r#"
[types]
common = ["pos", "aabb"]
advanced = ["box"]

[functions]
unary = ["volume"]
binary_symmetric = ["distance"]
binary_asymmetric = ["contains"]
"#,
        )
        .unwrap();
        assert_eq!(catalog.types.common, ["pos", "aabb"]);
        let partners: Vec<&String> = catalog.partner_types().collect();
        assert_eq!(partners, ["pos", "aabb", "box"]);
        assert_eq!(catalog.functions.binary_asymmetric, ["contains"]);
    }

    #[test]
    fn omitted_lists_default_to_empty() {
        let catalog = Catalog::from_toml_str("[types]\ncommon = [\"pos\"]\n").unwrap();
        assert!(catalog.types.advanced.is_empty());
        assert_eq!(catalog.functions, FunctionCatalog::default());
    }

    #[test]
    fn rejects_non_identifier() {
        let err = Catalog::from_toml_str("[types]\ncommon = [\"box boundary\"]\n").unwrap_err();
        assert!(matches!(err, Error::InvalidCatalogName { list: "types", .. }));
    }

    #[test]
    fn rejects_duplicate_across_type_lists() {
        let err = Catalog::from_toml_str(
            "[types]\ncommon = [\"pos\"]\nadvanced = [\"pos\"]\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateCatalogName { ref name, .. } if name == "pos"));
    }

    #[test]
    fn rejects_duplicate_function() {
        let err = Catalog::from_toml_str(
            "[types]\ncommon = [\"pos\"]\n[functions]\nunary = [\"area\", \"area\"]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateCatalogName { list: "functions.unary", .. }
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Catalog::from_toml_str("[types]\ncommon = []\nextra = []\n").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }
}
