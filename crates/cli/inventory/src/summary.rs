use colored::*;
use prettytable::{Cell, Row, Table};
use serde_json::Value;
use sn_types::{Bucket, CategorizedObjects, ObjectRecord};
use sn_utils_cli::InventorySnapshot;

/// Per-bucket object counts, headed by the total.
pub fn counts_table(objects: &CategorizedObjects) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(vec![
        Cell::new("Total Objects").style_spec("Fc"),
        Cell::new(&objects.all_objects.len().to_string()).style_spec("Fy"),
    ]));

    for bucket in Bucket::ALL {
        table.add_row(Row::new(vec![
            Cell::new(bucket.label()).style_spec("Fc"),
            Cell::new(&objects.bucket(bucket).len().to_string()).style_spec("Fy"),
        ]));
    }

    table
}

/// Headings and lines for the objects an operator usually needs next.
pub fn highlighted_objects(objects: &CategorizedObjects) -> Vec<(String, Vec<String>)> {
    let mut sections = Vec::new();

    let listed = [
        (Bucket::Cap, "📝 Cap Objects (for updating PCRs):"),
        (Bucket::EnclaveConfig, "⚙️  EnclaveConfig Objects:"),
        (Bucket::Enclave, "🔒 Enclave Objects:"),
        (Bucket::ProtocolConfig, "🛠️  ProtocolConfig Objects:"),
    ];
    for (bucket, heading) in listed {
        let records = objects.bucket(bucket);
        if records.is_empty() {
            continue;
        }
        let lines = records
            .iter()
            .enumerate()
            .flat_map(|(i, record)| {
                [
                    format!("  [{i}] Object ID: {}", object_id(record)),
                    format!("      Type: {}", record.type_tag),
                ]
            })
            .collect();
        sections.push((heading.to_string(), lines));
    }

    if !objects.upgrade_caps.is_empty() {
        let mut lines = Vec::new();
        for (i, record) in objects.upgrade_caps.iter().enumerate() {
            lines.push(format!("  [{i}] Object ID: {}", object_id(record)));
            if let Some(package) = record.content_field("package").and_then(Value::as_str) {
                lines.push(format!("      Package: {package}"));
            }
        }
        sections.push(("📦 UpgradeCaps (for package upgrades):".to_string(), lines));
    }

    sections
}

fn object_id(record: &ObjectRecord) -> &str {
    record.object_id.as_deref().unwrap_or("-")
}

pub fn print_summary(snapshot: &InventorySnapshot) {
    println!("\n{}", "========== Admin Objects Summary ==========".bright_cyan());
    println!("Network: {}", snapshot.network);
    println!("Admin Address: {}", snapshot.admin_address);
    println!("Timestamp: {}", snapshot.timestamp);
    println!();

    counts_table(&snapshot.objects).printstd();
    println!();

    for (heading, lines) in highlighted_objects(&snapshot.objects) {
        println!("{}", heading.bright_green());
        for line in lines {
            println!("{line}");
        }
        println!();
    }

    println!("{}\n", "===========================================".bright_cyan());
}
