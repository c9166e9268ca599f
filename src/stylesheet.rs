use std::collections::HashSet;

use crate::{Format, HookDefinition, HookId};

/// Resets a custom property to its guaranteed-invalid initial value.
const INVALID: &str = "initial";

/// Emit the defaults block followed by one override block per distinct
/// definition.
///
/// Defaults mark every hook inactive (`-0` invalid, `-1` empty) and are written
/// once per identifier. Each override inverts the pair wherever its selector
/// matches or its at-rule applies. Distinct definitions whose identifiers
/// collide each keep their own override block.
pub(crate) fn emit(hooks: &[(HookDefinition, HookId)], format: Format) -> String {
    let sp = format.space();
    let nl = format.newline();
    let ind = format.indent();

    let mut seen_defs = HashSet::new();
    let distinct: Vec<&(HookDefinition, HookId)> =
        hooks.iter().filter(|(def, _)| seen_defs.insert(def)).collect();

    let mut seen_ids = HashSet::new();
    let defaults: Vec<String> = distinct
        .iter()
        .filter(|(_, id)| seen_ids.insert(id))
        .flat_map(|(_, id)| {
            [
                format!("{ind}--{id}-0:{sp}{INVALID};"),
                format!("{ind}--{id}-1:{sp};"),
            ]
        })
        .collect();

    let overrides: Vec<String> = distinct
        .iter()
        .flat_map(|(def, id)| override_block(def, id, format))
        .collect();

    let css = format!(
        "*{sp}{{{nl}{}{nl}}}{nl}{}",
        defaults.join(nl),
        overrides.join(nl)
    );
    log::trace!("emitted {} hooks in {} bytes of css", distinct.len(), css.len());
    css
}

fn override_block(def: &HookDefinition, id: &HookId, format: Format) -> Vec<String> {
    let sp = format.space();
    let ind = format.indent();
    match def {
        HookDefinition::AtRule { .. } => vec![
            format!("{def} {{"),
            format!("{ind}* {{"),
            format!("{ind}{ind}--{id}-0:{sp};"),
            format!("{ind}{ind}--{id}-1:{sp}{INVALID};"),
            format!("{ind}}}"),
            "}".to_owned(),
        ],
        HookDefinition::Selector(pattern) => vec![
            format!("{}{sp}{{", pattern.replace(crate::types::PLACEHOLDER, "*")),
            format!("{ind}--{id}-0:{sp};"),
            format!("{ind}--{id}-1:{sp}{INVALID};"),
            "}".to_owned(),
        ],
    }
}
