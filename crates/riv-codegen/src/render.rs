//! Pure rendering of the TypeScript modules.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use indexmap::{IndexMap, IndexSet};
use riv_model::{Diagnostic, DiagnosticSource};
use tracing::{debug, warn};

use crate::artifact::{
    ARTBOARD_CONSTANTS_FILE, ARTBOARDS_FILE, GeneratedArtifactSet, GeneratedFile,
    IdentifierCollision, INDEX_FILE, STATE_MACHINES_FILE,
};
use crate::error::{CodegenError, Result};
use crate::identifier::to_identifier;
use crate::options::GenerateOptions;

const HEADER: &str = "// Generated by riv-typegen. Do not edit.\n";

/// Render every artifact for `names`.
///
/// Names are used verbatim. The ordered list keeps duplicates; the unions
/// list each distinct name once, in first-occurrence order.
/// `state-machines.ts` is only produced when at least one state-machine name
/// exists.
pub fn render(names: &[String], options: &GenerateOptions) -> Result<GeneratedArtifactSet> {
    if names.is_empty() {
        return Err(CodegenError::NoArtboards);
    }

    let base = options.base_identifier();
    let distinct: IndexSet<&str> = names.iter().map(String::as_str).collect();
    let (constants, collisions) = artboard_constants(&distinct);
    let diagnostics = collisions
        .iter()
        .map(|collision| {
            warn!(
                identifier = %collision.identifier,
                replaced = %collision.replaced,
                kept = %collision.kept,
                "artboard identifier collision"
            );
            Diagnostic::warning(
                DiagnosticSource::Codegen,
                format!(
                    "artboards {} and {} both map to identifier {}; keeping {}",
                    literal(&collision.replaced),
                    literal(&collision.kept),
                    collision.identifier,
                    literal(&collision.kept),
                ),
            )
        })
        .collect();

    let state_machine_names: Vec<String> = options
        .state_machines
        .values()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect();

    let mut files = vec![
        GeneratedFile {
            name: ARTBOARDS_FILE,
            contents: render_artboards(&base, names, &distinct),
        },
        GeneratedFile {
            name: ARTBOARD_CONSTANTS_FILE,
            contents: render_constants(&base, &constants),
        },
    ];
    if !state_machine_names.is_empty() {
        files.push(GeneratedFile {
            name: STATE_MACHINES_FILE,
            contents: render_state_machines(
                &base,
                &state_machine_names,
                &distinct,
                &options.state_machines,
            ),
        });
    }
    let modules: Vec<&str> = files.iter().map(|file| file.name).collect();
    files.push(GeneratedFile {
        name: INDEX_FILE,
        contents: render_index(&modules),
    });

    debug!(
        base = %base,
        artboards = distinct.len(),
        state_machines = state_machine_names.len(),
        files = files.len(),
        "rendered artifacts"
    );

    Ok(GeneratedArtifactSet {
        files,
        state_machine_names,
        collisions,
        diagnostics,
    })
}

/// Identifier to name, last writer wins at the first writer's position.
fn artboard_constants<'a>(
    distinct: &IndexSet<&'a str>,
) -> (IndexMap<String, &'a str>, Vec<IdentifierCollision>) {
    let mut constants: IndexMap<String, &str> = IndexMap::with_capacity(distinct.len());
    let mut collisions = Vec::new();
    for &name in distinct {
        let identifier = to_identifier(name);
        if let Some(previous) = constants.insert(identifier.clone(), name) {
            collisions.push(IdentifierCollision {
                identifier,
                replaced: previous.to_string(),
                kept: name.to_string(),
            });
        }
    }
    (constants, collisions)
}

fn render_artboards(base: &str, names: &[String], distinct: &IndexSet<&str>) -> String {
    let mut out = String::from(HEADER);
    let _ = writeln!(
        out,
        "\nexport type {base}ArtboardName = {};",
        union(distinct.iter().copied())
    );
    let _ = writeln!(
        out,
        "\nexport const {base}ArtboardNames = {} as const;",
        list(names.iter().map(String::as_str))
    );
    write_predicate(&mut out, base, "ArtboardName", "artboardNameSet");
    out
}

fn render_constants(base: &str, constants: &IndexMap<String, &str>) -> String {
    let mut out = String::from(HEADER);
    let _ = writeln!(out, "\nexport const {base}Artboard = {{");
    for (identifier, name) in constants {
        let _ = writeln!(out, "  {identifier}: {},", literal(name));
    }
    out.push_str("} as const;\n");
    let _ = writeln!(
        out,
        "\nexport type {base}ArtboardRef = (typeof {base}Artboard)[keyof typeof {base}Artboard];"
    );
    out
}

fn render_state_machines(
    base: &str,
    state_machine_names: &[String],
    artboards: &IndexSet<&str>,
    by_artboard: &BTreeMap<String, Vec<String>>,
) -> String {
    let mut out = String::from(HEADER);
    let _ = writeln!(
        out,
        "\nexport type {base}StateMachineName = {};",
        union(state_machine_names.iter().map(String::as_str))
    );
    let _ = writeln!(
        out,
        "\nexport const {base}StateMachineNames = {} as const;",
        list(state_machine_names.iter().map(String::as_str))
    );
    write_predicate(&mut out, base, "StateMachineName", "stateMachineNameSet");

    let _ = writeln!(out, "\nexport const {base}StateMachinesByArtboard = {{");
    for &artboard in artboards {
        let machines = by_artboard
            .get(artboard)
            .map(|names| list(names.iter().map(String::as_str)))
            .unwrap_or_else(|| "[]".to_string());
        let _ = writeln!(out, "  {}: {machines},", literal(artboard));
    }
    out.push_str("} as const;\n");
    out
}

fn render_index(modules: &[&str]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for &module in modules {
        let stem = module.strip_suffix(".ts").unwrap_or(module);
        let _ = writeln!(out, "export * from \"./{stem}\";");
    }
    out
}

fn write_predicate(out: &mut String, base: &str, type_suffix: &str, set_name: &str) {
    let type_name = format!("{base}{type_suffix}");
    let _ = writeln!(
        out,
        "\nconst {set_name}: ReadonlySet<string> = new Set({type_name}s);"
    );
    let _ = writeln!(
        out,
        "\nexport function is{type_name}(value: string): value is {type_name} {{\n  return {set_name}.has(value);\n}}"
    );
}

/// JSON-escaped string literal.
fn literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn union<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.map(literal).collect::<Vec<_>>().join(" | ")
}

fn list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    format!("[{}]", values.map(literal).collect::<Vec<_>>().join(", "))
}
