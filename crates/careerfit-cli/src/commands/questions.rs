//! The `careerfit questions` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerfit_core::catalog;
use careerfit_core::Section;

pub fn execute(section: Option<String>) -> Result<()> {
    let sections: Vec<Section> = match section {
        Some(s) => vec![s.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?],
        None => Section::ORDER.to_vec(),
    };

    for section in sections {
        let questions = catalog::section_questions(section);
        println!("{} ({} questions)", section.title(), questions.len());

        let mut table = Table::new();
        table.set_header(vec!["ID", "Type", "Topic", "Weight", "Question"]);
        for q in questions {
            table.add_row(vec![
                Cell::new(&q.id),
                Cell::new(q.kind),
                Cell::new(catalog::subcategory_title(&q.subcategory)),
                Cell::new(format!("{:.1}", q.weight())),
                Cell::new(&q.question),
            ]);
        }
        println!("{table}\n");
    }

    Ok(())
}
