use achmap_core::constants::DEFAULT_LOG_LEVEL;
use achmap_core::corpus::build_client;
use achmap_core::{logging, AliasTable, Context, Corpus, DutyMapper, Matcher, Normalizer, Result};
use clap::{Arg, Command};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let matches = Command::new("achievementmapper")
        .version("0.1.0")
        .about("Map duty names read from stdin to FFXIV achievement ids")
        .author("Achievement Mapper Team")
        .arg(
            Arg::new("level")
                .short('l')
                .long("level")
                .value_name("LEVEL")
                .default_value(DEFAULT_LOG_LEVEL)
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("aliases")
                .short('a')
                .long("aliases")
                .value_name("FILE")
                .help("YAML file with extra duty alias corrections")
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("Achievement.csv location, overrides ACHMAP_URL")
        )
        .get_matches();

    // Initialize tracing on stderr, stdout carries only the JSON table
    let level = matches
        .get_one::<String>("level")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    logging::init_tracing(level);

    // Initialize context from environment, command line wins
    let mut ctx = Context::from_env()?;
    if let Some(url) = matches.get_one::<String>("url") {
        ctx.set_achievements_url(url)?;
    }
    if let Some(aliases_yaml) = matches.get_one::<String>("aliases") {
        ctx.aliases_yaml = aliases_yaml.clone();
    }

    if ctx.ctx_out {
        info!("Context: {:?}", ctx);
    }

    let mut aliases = AliasTable::builtin();
    if !ctx.aliases_yaml.is_empty() {
        match aliases.extend_from_yaml_file(&ctx.aliases_yaml) {
            Ok(count) => info!("Loaded {} aliases from: {}", count, ctx.aliases_yaml),
            Err(err) => {
                error!("Failed to load aliases from {}: {}", ctx.aliases_yaml, err);
                return Err(err);
            }
        }
    }
    let normalizer = Normalizer::new(aliases)?;

    let client = build_client()?;
    let corpus = match Corpus::fetch(&client, &ctx.achievements_url).await {
        Ok(corpus) => corpus,
        Err(err) => {
            error!("Failed to load achievements: {}", err);
            return Err(err);
        }
    };

    info!("Reading stdin...");
    let mut mapper = DutyMapper::new(normalizer, Matcher::new(&corpus));
    mapper.read_all(tokio::io::BufReader::new(tokio::io::stdin())).await;

    let table = mapper.finish();
    print!("{}", table.to_json_pretty()?);

    Ok(())
}
