//! Integration tests for config bundles and document loading.

use std::fs;

use attire::{
    create_config, load_config_bundle, ClassList, Config, ConfigBundle, ConfigLoadError, Props,
    VariantSet,
};

#[test]
fn test_create_config_packages_inputs_verbatim() {
    let config = Config::new()
        .variant("size", [("sm", "small"), ("lg", "large")])
        .default_variant("size", "sm");

    let bundle = create_config("base", config.clone());

    assert_eq!(
        bundle,
        ConfigBundle {
            base: ClassList::from("base"),
            variants: config,
        }
    );
}

#[test]
fn test_bundle_integrates_with_variant_set() {
    let bundle = create_config(
        "base",
        Config::new()
            .variant("size", [("sm", "small"), ("lg", "large")])
            .default_variant("size", "sm")
            .conditional("outline", "outline"),
    );

    let style = VariantSet::from_bundle(bundle);
    assert_eq!(style.class_names(&Props::new()), "base small");
    assert_eq!(
        style.class_names(&Props::new().with("size", "lg").with("outline", true)),
        "base large outline"
    );
}

#[test]
fn test_load_json_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("button.json");
    fs::write(
        &path,
        r#"{
            "base": "btn",
            "variants": {
                "variants": { "size": { "sm": "btn-sm", "lg": "btn-lg" } },
                "default_variants": { "size": "sm" },
                "conditionals": { "outline": "btn-outline" }
            }
        }"#,
    )
    .unwrap();

    let style = VariantSet::from_bundle(load_config_bundle(&path).unwrap());
    assert_eq!(style.class_names(&Props::new()), "btn btn-sm");
    assert_eq!(
        style.class_names(&Props::new().with("size", "lg").with("outline", true)),
        "btn btn-lg btn-outline"
    );
}

#[test]
fn test_load_yaml_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("button.yaml");
    fs::write(
        &path,
        r#"
base: [btn, btn-solid]
variants:
  variants:
    size:
      sm: btn-sm
      lg: [btn-lg, btn-wide]
  default_variants:
    size: sm
"#,
    )
    .unwrap();

    let style = VariantSet::from_bundle(load_config_bundle(&path).unwrap());
    assert_eq!(style.class_names(&Props::new()), "btn btn-solid btn-sm");
    assert_eq!(
        style.class_names(&Props::new().with("size", "lg")),
        "btn btn-solid btn-lg btn-wide"
    );
}

#[test]
fn test_load_historical_document_spelling() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"{
            "base": "baseclass",
            "variants": {
                "variants": { "size": { "sm": "small", "lg": "large" } },
                "defaultVariants": { "size": "sm" },
                "conditional": { "outline": "outline" },
                "exchange": {
                    "smOutline": {
                        "variant": "size:sm",
                        "prop": "outline",
                        "with": "custom-small-outline"
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let style = VariantSet::from_bundle(load_config_bundle(&path).unwrap());
    assert_eq!(
        style.class_names(&Props::new().with("size", "sm").with("outline", true)),
        "baseclass custom-small-outline"
    );
}

#[test]
fn test_loaded_config_validates() {
    let bundle = ConfigBundle::from_json_str(
        r#"{
            "base": "btn",
            "variants": {
                "variants": { "size": { "sm": "btn-sm" } },
                "default_variants": { "size": "lg" }
            }
        }"#,
    )
    .unwrap();

    assert!(bundle.variants.validate().is_err());
    // A failing validation does not stop resolution; the dangling default
    // simply emits nothing.
    let style = VariantSet::from_bundle(bundle);
    assert_eq!(style.class_names(&Props::new()), "btn");
}

#[test]
fn test_load_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("button.toml");
    fs::write(&path, "base = 'btn'").unwrap();

    assert!(matches!(
        load_config_bundle(&path),
        Err(ConfigLoadError::UnrecognizedExtension { .. })
    ));
}
