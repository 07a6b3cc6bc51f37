//! Column-to-property mapping: renders one C# property declaration per
//! schema column, annotations included.

use tiersmith_config::NameCase;
use tiersmith_core::{ColumnDef, RowsetDef, TableDef};
use tiersmith_naming::{sanitize_identifier, to_pascal_case};

/// Two levels of four-space indent: namespace + class.
const INDENT: &str = "        ";

/// Property name for a raw column name under the naming policy.
pub fn property_name(raw: &str, case: NameCase) -> String {
    let name = sanitize_identifier(raw);
    match case {
        NameCase::Pascal => to_pascal_case(&name),
        NameCase::Preserve => name,
    }
}

/// Render the property declaration for one column.
///
/// Primary-key columns override the base `Id` property and are annotated
/// as the key column; everything else gets column mapping (under the
/// Pascal policy), required/max-length/identity annotations as the
/// column metadata dictates, and a `?`-suffixed type when a value type
/// is nullable.
pub fn render_property(column: &ColumnDef, case: NameCase) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(comment) = column.comment.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("{INDENT}/// <summary>"));
        lines.push(format!("{INDENT}/// {comment}"));
        lines.push(format!("{INDENT}/// </summary>"));
    }

    if column.primary_key {
        lines.push(format!("{INDENT}[Key]"));
        lines.push(format!("{INDENT}[Column(\"{}\")]", column.name));
        if column.identity {
            lines.push(format!(
                "{INDENT}[DatabaseGenerated(DatabaseGeneratedOption.Identity)]"
            ));
        }
        lines.push(format!(
            "{INDENT}public override {} Id {{ get; set; }}",
            column.r#type.to_csharp_type()
        ));
    } else {
        if case.is_pascal() {
            lines.push(format!("{INDENT}[Column(\"{}\")]", column.name));
        }
        if !column.nullable {
            lines.push(format!("{INDENT}[Required]"));
        }
        if column.r#type.is_text() {
            if let Some(len) = column.max_length.filter(|l| *l > 0) {
                lines.push(format!("{INDENT}[MaxLength({len})]"));
            }
        }
        if column.identity {
            lines.push(format!(
                "{INDENT}[DatabaseGenerated(DatabaseGeneratedOption.Identity)]"
            ));
        }
        lines.push(format!(
            "{INDENT}public {} {} {{ get; set; }}",
            column.r#type.declared_type(column.nullable),
            property_name(&column.name, case)
        ));
    }

    lines.join("\n")
}

/// Render all columns of a table into the `{ModelProperties}` block, one
/// blank line between properties.
pub fn render_entity_properties(table: &TableDef, case: NameCase) -> String {
    let mut out = String::new();
    for column in &table.columns {
        out.push_str(&render_property(column, case));
        out.push_str("\n\n");
    }
    out
}

/// Render rowset columns into the `{ViewModelProperties}` block. Runtime
/// shapes carry no nullability or length metadata, so only the column
/// mapping (under the Pascal policy) and the bare declaration appear.
pub fn render_rowset_properties(rowset: &RowsetDef, case: NameCase) -> String {
    let mut out = String::new();
    for column in &rowset.columns {
        if case.is_pascal() {
            out.push_str(&format!("{INDENT}[Column(\"{}\")]\n", column.name));
        }
        out.push_str(&format!(
            "{INDENT}public {} {} {{ get; set; }}\n\n",
            column.r#type.to_csharp_type(),
            property_name(&column.name, case)
        ));
    }
    out
}
