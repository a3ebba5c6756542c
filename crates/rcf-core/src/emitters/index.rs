use crate::config::GeneratorConfig;
use crate::name::ComponentName;
use crate::pattern::PatternKind;

/// Barrel index for a single component folder.
///
/// The exported identifier follows the `uppercase` flag (normalized name
/// when on, the raw name otherwise); the import path always uses the raw
/// name. With `flatindex` the re-export points at `./<name>` with no
/// pattern suffix, matching the pre-pattern layout.
pub fn create_index(name: &ComponentName, config: &GeneratorConfig) -> String {
    let display = if config.has_flag("uppercase") {
        name.pascal()
    } else {
        name.raw()
    };
    let named = config.has_flag("namedexports");

    if config.has_flag("flatindex") {
        let exported = if named {
            display.to_string()
        } else {
            "default".to_string()
        };
        return format!("export {{ {exported} }} from './{}';\n", name.raw());
    }

    let pattern = PatternKind::resolve(config);
    let exported = if named {
        format!("{display}{} as {display}", pattern.as_str())
    } else {
        "default".to_string()
    };

    format!(
        "export {{ {exported} }} from './{}.{}';\n",
        name.raw(),
        pattern.file_suffix()
    )
}

/// Root index re-exporting every component folder, in the order given.
pub fn create_index_for_folders(folders: &[String]) -> String {
    let mut out = String::new();
    for folder in folders {
        // Trailing space before the newline is part of the fixed format.
        out.push_str(&format!("import {folder} from './{folder}' \n"));
    }
    out.push_str("export {\n    ");
    for (i, folder) in folders.iter().enumerate() {
        if i == folders.len() - 1 {
            out.push_str(folder);
        } else {
            out.push_str(&format!("{folder}, \n"));
        }
    }
    out.push_str("\n}");
    out
}
