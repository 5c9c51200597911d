use crate::core::{ElementType, Labels};
use crate::coverage::CoverageStats;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

struct Captions {
    heading: &'static str,
    columns: [&'static str; 5],
    discovered_heading: &'static str,
    discovered_total: &'static str,
}

fn captions(labels: Labels) -> Captions {
    match labels {
        Labels::Ru => Captions {
            heading: "Статистика описаний",
            columns: ["Тип", "Всего", "Найдено", "Не найдено", "Пустых"],
            discovered_heading: "Новые описания из комментариев",
            discovered_total: "Всего новых описаний",
        },
        Labels::En => Captions {
            heading: "Description statistics",
            columns: ["Type", "Total", "Found", "Missing", "Empty"],
            discovered_heading: "Descriptions discovered in doc comments",
            discovered_total: "Total discovered",
        },
    }
}

/// Renders per-type coverage counts and discovery totals.
///
/// Types that never occurred in the run are left out.
pub fn render_statistics(stats: &CoverageStats, labels: Labels) -> String {
    let captions = captions(labels);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(captions.columns.to_vec());

    let seen: Vec<ElementType> = ElementType::ALL
        .into_iter()
        .filter(|ty| stats.total(*ty) > 0)
        .collect();

    for ty in &seen {
        let counts = stats.counts(*ty);
        table.add_row(vec![
            Cell::new(ty.label(labels)),
            Cell::new(counts.total).set_alignment(CellAlignment::Right),
            Cell::new(counts.found).set_alignment(CellAlignment::Right),
            Cell::new(counts.missing).set_alignment(CellAlignment::Right),
            Cell::new(counts.empty).set_alignment(CellAlignment::Right),
        ]);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", captions.heading.bold().cyan()));
    out.push_str(&format!("{table}\n"));

    out.push_str(&format!("\n{}\n", captions.discovered_heading.bold()));
    for ty in &seen {
        out.push_str(&format!("  {}: {}\n", ty.label(labels), stats.discovered(*ty)));
    }
    out.push_str(&format!(
        "{}: {}\n",
        captions.discovered_total,
        stats.total_discovered().to_string().green()
    ));
    out
}

pub fn print_statistics(stats: &CoverageStats, labels: Labels) {
    println!();
    print!("{}", render_statistics(stats, labels));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageTracker;
    use crate::descriptions::{DescriptionStore, MatchPolicy};
    use tempfile::TempDir;

    fn sample_stats(temp: &TempDir) -> CoverageStats {
        let store = DescriptionStore::from_sets(temp.path(), Vec::new());
        let mut tracker = CoverageTracker::new(store, MatchPolicy::default());
        tracker.record(ElementType::Class, "Foo", None, "A foo.");
        tracker.record(ElementType::Method, "Foo::bar", Some("bar"), "");
        tracker.stats().clone()
    }

    #[test]
    fn test_render_statistics_lists_seen_types() {
        colored::control::set_override(false);
        let temp = TempDir::new().unwrap();
        let rendered = render_statistics(&sample_stats(&temp), Labels::En);
        colored::control::unset_override();

        assert!(rendered.contains("Description statistics"));
        assert!(rendered.contains("Class"));
        assert!(rendered.contains("Method"));
        assert!(!rendered.contains("Variable"));
        assert!(rendered.contains("Total discovered: 1"));
    }

    #[test]
    fn test_render_statistics_russian_captions() {
        colored::control::set_override(false);
        let temp = TempDir::new().unwrap();
        let rendered = render_statistics(&sample_stats(&temp), Labels::Ru);
        colored::control::unset_override();

        assert!(rendered.contains("Не найдено"));
        assert!(rendered.contains("Класс: 1"));
    }
}
