//! Writing report documents to disk

use crate::error::SummaryError;
use crate::output::diff::PluginDiff;
use crate::rules::PluginMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Report name of a config: its path relative to `work_dir`, without the final extension
///
/// `./apps/web/.eslintrc.js` → `apps/web/.eslintrc`
pub fn config_name(config_path: &Path, work_dir: &Path) -> String {
    let absolute = normalize(&work_dir.join(config_path));
    let relative = relative_to(&absolute, &normalize(work_dir));

    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lexically resolves `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(result.components().next_back(), Some(Component::Normal(_))) {
                    result.pop();
                } else {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }
    relative
}

/// File name of a plugin's diff document: `@scope/eslint-plugin` → `@scope-eslint-plugin.md`
pub fn diff_file_name(plugin_name: &str) -> String {
    format!("{}.md", plugin_name.replace('/', "-"))
}

fn write_file(path: &Path, contents: &str) -> Result<(), SummaryError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| SummaryError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| SummaryError::io(path, e))
}

/// Path of a per-config document inside `output_dir`
///
/// Parent and root components of `config_name` are dropped so configs outside
/// the working directory still land under `output_dir`.
fn report_path(output_dir: &Path, config_name: &str, extension: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for component in Path::new(config_name).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
    path.as_mut_os_string().push(format!(".{extension}"));
    path
}

/// Writes `<output_dir>/<config_name>.md`, creating directories as needed
///
/// `..` segments of `config_name` are ignored: `../shared/.eslintrc` is
/// written to `<output_dir>/shared/.eslintrc.md`.
pub fn write_report(
    output_dir: &Path,
    config_name: &str,
    markdown: &str,
) -> Result<PathBuf, SummaryError> {
    let path = report_path(output_dir, config_name, "md");
    write_file(&path, markdown)?;
    Ok(path)
}

/// Writes the aggregated rules as pretty JSON to `<output_dir>/<config_name>.json`
pub fn write_json_report(
    output_dir: &Path,
    config_name: &str,
    plugins: &PluginMap,
) -> Result<PathBuf, SummaryError> {
    let path = report_path(output_dir, config_name, "json");
    let json = serde_json::to_string_pretty(plugins)?;
    write_file(&path, &json)?;
    Ok(path)
}

/// Writes one plugin's diff document into `diff_dir`
pub fn write_plugin_diff(diff_dir: &Path, diff: &PluginDiff) -> Result<PathBuf, SummaryError> {
    let path = diff_dir.join(diff_file_name(&diff.plugin_name));
    write_file(&path, &diff.markdown)?;
    Ok(path)
}
