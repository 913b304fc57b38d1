use serde::Serialize;

use super::source::load;
use super::{ChampionsArgs, OutputFormat};
use crate::exit_codes::SUCCESS;

#[derive(Serialize)]
struct ChampionRow<'a> {
    id: &'a str,
    name: &'a str,
    title: &'a str,
    tags: &'a [String],
    image_url: String,
}

pub async fn run(args: ChampionsArgs) -> anyhow::Result<i32> {
    let loaded = load(&args.data).await?;

    match args.format {
        OutputFormat::Json => {
            let rows: Vec<_> = loaded
                .champions
                .iter()
                .map(|c| ChampionRow {
                    id: &c.id,
                    name: &c.name,
                    title: &c.title,
                    tags: &c.tags,
                    image_url: loaded.config.image_url(c),
                })
                .collect();
            println!("{}", serde_json::to_string(&rows)?);
        }
        OutputFormat::Text => {
            for champion in loaded.champions.iter() {
                println!("{:<16} {}", champion.name, champion.tags.join(", "));
            }
        }
    }
    Ok(SUCCESS)
}
