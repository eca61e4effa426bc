use svcgen_core::config::GeneratorConfig;
use svcgen_core::prelude::*;
use svcgen_core::{AccessorStyle, ConfigValue, TypeRef};
use svcgen_render::{file_name, module_name, render_class, RenderError, RenderOptions};

const USER_SERVICE: &str = include_str!("../../svcgen-runtime/tests/fixtures/user_service.rs");
const PRODUCT_SERVICE: &str =
    include_str!("../../svcgen-runtime/tests/fixtures/product_service.rs");

fn user() -> StaticEntity {
    StaticEntity::new(EntityConfig::new("User").with_pagination(true), "u64")
        .field(FieldInfo::new("email", "String"))
        .field(FieldInfo::new("name", "String"))
        .endpoint(EndpointMember::field("email", "User"))
        .endpoint(EndpointMember::callable(
            "greeting",
            "User",
            [("prefix".to_string(), "String".to_string())],
        ))
}

fn user_options() -> RenderOptions {
    RenderOptions {
        imports: vec!["super::{User, UserRepository}".to_string()],
        bean_wiring: false,
    }
}

fn product() -> StaticEntity {
    StaticEntity::new(
        EntityConfig::new("Product")
            .with_pagination(true)
            .with_filter(["category", "type"]),
        "i64",
    )
    .field(FieldInfo::new("category", "String"))
    .field(FieldInfo::new("type", "String"))
    .field(FieldInfo::new("unitPrice", "f64"))
    .endpoint(EndpointMember::field("unitPrice", "Product"))
    .endpoint(EndpointMember::field("type", "Product"))
}

fn render(entity: &StaticEntity, options: &RenderOptions) -> Result<String, RenderError> {
    let class = ServiceGenerator::default().generate(entity).unwrap();
    render_class(&class, options)
}

#[test]
fn user_service_matches_runtime_fixture() {
    let rendered = render(&user(), &user_options()).unwrap();
    let expected = syn::parse_file(USER_SERVICE).unwrap();
    let actual = syn::parse_file(&rendered).unwrap();
    assert!(actual == expected, "rendered service drifted from fixture:\n{rendered}");
}

#[test]
fn product_service_matches_runtime_fixture() {
    let options = RenderOptions {
        imports: vec!["super::{Product, ProductRepository}".to_string()],
        bean_wiring: false,
    };
    let rendered = render(&product(), &options).unwrap();
    let expected = syn::parse_file(PRODUCT_SERVICE).unwrap();
    let actual = syn::parse_file(&rendered).unwrap();
    assert!(actual == expected, "rendered service drifted from fixture:\n{rendered}");
}

#[test]
fn layout_and_indentation() {
    let rendered = render(&user(), &user_options()).unwrap();
    assert!(rendered.starts_with("// Generated by svcgen."));
    assert!(rendered.contains("use svcgen_runtime::prelude::*;\nuse super::{User, UserRepository};\n"));
    assert!(rendered.contains(
        "        let window = if let (Some(page), Some(page_size)) = (page, page_size) {\n            PageWindow::new(page, page_size)\n        } else {\n"
    ));
    assert!(rendered.contains("        };\n"));
    assert!(!rendered.contains("#[bean]"));
}

#[test]
fn filtered_listing_uses_snake_case() {
    let product = StaticEntity::new(
        EntityConfig::new("Product").with_filter(["category", "minPrice"]),
        "i64",
    )
    .field(FieldInfo::new("category", "String"))
    .field(FieldInfo::new("minPrice", "f64"));

    let rendered = render(&product, &RenderOptions::default()).unwrap();
    assert!(rendered
        .contains("pub async fn all_by_filter(&self, category: String, min_price: f64) -> ServiceResult {"));
    assert!(rendered.contains("self.repository.all_by_filter(category, min_price).await?"));
    assert!(!rendered.contains("PageWindow"));
}

#[test]
fn bean_wiring_annotates_constructor() {
    let options = RenderOptions {
        imports: vec!["r2e::prelude::*".to_string()],
        bean_wiring: true,
    };
    let rendered = render(&user(), &options).unwrap();
    assert!(rendered.contains("#[bean]\nimpl UserService {\n    pub fn new(repository: UserRepository) -> Self {"));
}

#[test]
fn only_failing_methods_document_errors() {
    let rendered = render(&user(), &RenderOptions::default()).unwrap();
    assert_eq!(rendered.matches("/// # Errors").count(), 3);
}

#[test]
fn keyword_fields_become_raw_identifiers() {
    let entity = StaticEntity::new(EntityConfig::new("Token").with_filter(["type"]), "i64")
        .field(FieldInfo::new("type", "String"));
    let rendered = render(&entity, &RenderOptions::default()).unwrap();
    assert!(rendered.contains("r#type: String"));
}

#[test]
fn field_endpoints_follow_identifier_casing() {
    let rendered = render(&product(), &RenderOptions::default()).unwrap();
    assert!(rendered.contains("pub async fn r#type(&self, id: i64) -> ServiceResult {"));
    assert!(rendered.contains("?.r#type)\n"));
    assert!(rendered.contains("pub async fn unit_price(&self, id: i64) -> ServiceResult {"));
    assert!(rendered.contains("?.unit_price)\n"));

    let naming = NamingConfig {
        accessor_style: AccessorStyle::Getter,
        ..NamingConfig::default()
    };
    let class = ServiceGenerator::new(naming).generate(&product()).unwrap();
    let rendered = render_class(&class, &RenderOptions::default()).unwrap();
    assert!(rendered.contains("?.get_type())\n"));
    assert!(rendered.contains("?.get_unit_price())\n"));
}

#[test]
fn window_local_avoids_cased_filter_parameter() {
    let entity = StaticEntity::new(
        EntityConfig::new("Shop")
            .with_pagination(true)
            .with_filter(["Window"]),
        "i64",
    )
    .field(FieldInfo::new("Window", "String"));
    let rendered = render(&entity, &RenderOptions::default()).unwrap();
    assert!(rendered.contains("pub async fn all_by_filter(&self, window: String, page: Option<u64>"));
    assert!(rendered.contains("let window_ = if let"));
    assert!(rendered.contains("self.repository.all_by_filter(window, &window_).await?"));
}

#[test]
fn invalid_declared_type_is_rejected() {
    let entity = StaticEntity::new(EntityConfig::new("Broken").with_filter(["bad"]), "i64")
        .field(FieldInfo::new("bad", "Vec<"));
    match render(&entity, &RenderOptions::default()) {
        Err(RenderError::InvalidType { ty, .. }) => assert_eq!(ty, "Vec<"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn case_collisions_are_rejected() {
    let entity = StaticEntity::new(
        EntityConfig::new("Listing")
            .with_pagination(true)
            .with_filter(["page_size"]),
        "i64",
    )
    .field(FieldInfo::new("page_size", "u32"));
    assert_eq!(
        render(&entity, &RenderOptions::default()).unwrap_err(),
        RenderError::DuplicateIdentifier {
            scope: "method 'allByFilter'".into(),
            name: "page_size".into(),
        }
    );

    let clash = StaticEntity::new(EntityConfig::new("Doc"), "i64")
        .field(FieldInfo::new("save", "bool"))
        .endpoint(EndpointMember::field("save", "Doc"));
    assert!(matches!(
        render(&clash, &RenderOptions::default()),
        Err(RenderError::DuplicateIdentifier { ref name, .. }) if name == "save"
    ));
}

#[test]
fn unparsable_output_is_rejected() {
    let mut class = ServiceGenerator::default().generate(&user()).unwrap();
    class.name = "User Service".to_string();
    assert!(matches!(
        render_class(&class, &RenderOptions::default()),
        Err(RenderError::InvalidSyntax(_))
    ));

    let mut class = ServiceGenerator::default().generate(&user()).unwrap();
    class.repository.ty = TypeRef::Declared("Repo<".into());
    assert!(matches!(
        render_class(&class, &RenderOptions::default()),
        Err(RenderError::InvalidType { .. })
    ));
}

#[test]
fn file_and_module_names() {
    let class = ServiceGenerator::default().generate(&user()).unwrap();
    assert_eq!(file_name(&class), "user_service.rs");
    assert_eq!(module_name(&class), "user_service");
}

#[test]
fn options_from_config() {
    let yaml = r#"
svcgen:
  render:
    imports:
      - "crate::models::*"
      - "crate::repositories::*"
    bean_wiring: true
"#;
    let config = GeneratorConfig::from_yaml_str(yaml, "test").unwrap();
    let options: RenderOptions = config.section().unwrap();
    assert_eq!(options.imports, vec!["crate::models::*", "crate::repositories::*"]);
    assert!(options.bean_wiring);

    let mut env_style = GeneratorConfig::empty();
    env_style.set(
        "svcgen.render.imports",
        ConfigValue::String("a::B, c::D".into()),
    );
    let options: RenderOptions = env_style.section().unwrap();
    assert_eq!(options.imports, vec!["a::B", "c::D"]);
    assert!(!options.bean_wiring);
}
