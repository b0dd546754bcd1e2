use std::env;

use holoseq::reader;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = env::args().nth(1).expect("missing src");

    let haplotypes: Vec<String> = env::args().skip(2).collect();
    let haplotypes = if haplotypes.is_empty() {
        None
    } else {
        Some(haplotypes)
    };

    let dataset = reader::open(src)?.read_dataset()?;

    let mut builder = Builder::default();
    builder.push_record(["Haplotype", "Contig", "Start", "Points (x)"]);

    for haplotype in dataset.haplotypes().iter() {
        if let Some(ref haplotypes) = haplotypes {
            if !haplotypes.iter().any(|name| name == haplotype.name()) {
                continue;
            }
        }

        let contigs = haplotype.contigs();

        for (i, contig) in contigs.iter().enumerate() {
            let end = contigs.get(i + 1).map(|next| next.start());

            let points = dataset
                .coordinates()
                .x()
                .iter()
                .filter(|&&x| x >= contig.start() && end.map(|end| x < end).unwrap_or(true))
                .count();

            builder.push_record([
                haplotype.name(),
                contig.name(),
                &contig.start().to_string(),
                &points.to_string(),
            ]);
        }
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", dataset.title());
    println!("{}", table);

    Ok(())
}
