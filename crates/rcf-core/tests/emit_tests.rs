use rcf_core::config::{ConfigValue, GeneratorConfig};
use rcf_core::emitters::test as test_emitter;
use rcf_core::emitters::{component, controller, data_binding, stories, style};
use rcf_core::name::ComponentName;
use rcf_core::templates::TemplateLocator;

fn config_with(flags: &[&str]) -> GeneratorConfig {
    let mut cfg = GeneratorConfig::default();
    for flag in flags {
        cfg.set_flag(flag, true);
    }
    cfg
}

fn name() -> ComponentName {
    ComponentName::parse("my-button").unwrap()
}

#[test]
fn test_component_default_export() {
    let cfg = config_with(&["functional"]);
    let out = component::create_component(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("const MyButton"));
    assert!(out.contains("export default MyButton;"));
    assert!(out.contains("className=\"MyButton\""));
    assert!(!out.contains("PropTypes"));
}

#[test]
fn test_component_named_export_typescript() {
    let cfg = config_with(&["functional", "typescript", "namedexports"]);
    let out = component::create_component(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("export interface MyButtonProps"));
    assert!(out.contains("export { MyButton };"));
    assert!(!out.contains("export default"));
}

#[test]
fn test_component_class_variant() {
    let cfg = config_with(&[]);
    let out = component::create_component(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("class MyButton extends Component"));
}

#[test]
fn test_component_native_target() {
    let cfg = config_with(&["functional", "reactnative"]);
    let out = component::create_component(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("react-native"));
    assert!(out.contains("<View>"));
}

#[test]
fn test_component_css_modules_extension() {
    let cfg = config_with(&["functional", "cssmodules", "scss"]);
    let out = component::create_component(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("import styles from './MyButton.module.scss';"));
}

#[test]
fn test_controller_wraps_view() {
    let cfg = config_with(&["functional", "namedexports"]);
    let out = controller::create_controller(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("import { MyButton } from './MyButton.view';"));
    assert!(out.contains("export { MyButtonController };"));
}

#[test]
fn test_data_binding_query_names() {
    let cfg = config_with(&["functional", "graphql"]);
    let out = data_binding::create_data_binding(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("MYBUTTON_QUERY"));
    assert!(out.contains("mybutton {"));
    assert!(out.contains("MyButtonApollo"));
}

#[test]
fn test_data_binding_types_import_only_with_typescript() {
    let mut cfg = config_with(&["functional", "graphql", "typescript"]);
    cfg.set_value(
        "graphqldefs",
        ConfigValue::Str("./src/models/graphql".to_string()),
    );
    let out = data_binding::create_data_binding(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("import { MyButtonQuery } from './src/models/graphql';"));

    let mut js_cfg = config_with(&["functional", "graphql"]);
    js_cfg.set_value(
        "graphqldefs",
        ConfigValue::Str("./src/models/graphql".to_string()),
    );
    let js_out =
        data_binding::create_data_binding(&name(), &js_cfg, &TemplateLocator::default()).unwrap();
    assert!(!js_out.contains("./src/models/graphql"));
}

#[test]
fn test_test_uses_raw_name_when_uppercase_off() {
    let cfg = config_with(&[]);
    let out = test_emitter::create_test(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("from './my-button.view'"));
    assert!(out.contains("describe('MyButton'"));
}

#[test]
fn test_test_uses_normalized_name_when_uppercase_on() {
    let cfg = config_with(&["uppercase"]);
    let out = test_emitter::create_test(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("from './MyButton.view'"));
}

#[test]
fn test_test_wraps_in_mocked_provider_with_data_binding() {
    let cfg = config_with(&["graphql"]);
    let out = test_emitter::create_test(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("MockedProvider"));
    assert!(out.contains("MYBUTTON_QUERY"));
}

#[test]
fn test_test_story_assertion_gated_on_stories_flag() {
    let with = config_with(&["stories"]);
    let without = config_with(&[]);
    let locator = TemplateLocator::default();
    assert!(test_emitter::create_test(&name(), &with, &locator)
        .unwrap()
        .contains(".stories"));
    assert!(!test_emitter::create_test(&name(), &without, &locator)
        .unwrap()
        .contains(".stories"));
}

#[test]
fn test_stories_pattern_matches_index_pattern() {
    let cfg = config_with(&["stories", "graphql"]);
    let out = stories::create_stories(&name(), None, &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("from './mybutton.apollo'"));
    assert!(out.contains("(Apollo)"));
}

#[test]
fn test_stories_title_includes_context_path() {
    let cfg = config_with(&["stories"]);
    let out = stories::create_stories(&name(), Some("Design System"), &cfg, &TemplateLocator::default())
        .unwrap();
    assert!(out.contains("title: 'Design System/MyButton (View)'"));
}

#[test]
fn test_stories_notest_disables_storyshots() {
    let cfg = config_with(&["stories", "notest"]);
    let out = stories::create_stories(&name(), None, &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("storyshots: { disable: true }"));
}

#[test]
fn test_style_hyphenated_class() {
    let cfg = config_with(&["hyphenatedcss"]);
    let out = style::create_style(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains(".my-button {"));
    assert!(!out.contains(".MyButton {"));
}

#[test]
fn test_style_pascal_class_by_default() {
    let cfg = config_with(&[]);
    let out = style::create_style(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains(".MyButton {"));
}

#[test]
fn test_style_scss_includes() {
    let mut cfg = config_with(&["scss"]);
    cfg.set_value(
        "scssinclude",
        ConfigValue::List(vec!["src/styles/vars.scss".to_string()]),
    );
    let out = style::create_style(&name(), &cfg, &TemplateLocator::default()).unwrap();
    assert!(out.contains("@import 'src/styles/vars.scss';"));
}
