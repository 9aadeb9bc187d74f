use color_eyre::eyre::{Result, eyre};
use jailfeed_lib::{
    config::Config,
    filter::Filter,
    item::{ContentKind, Draft},
    notify::LogNotifier,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = Config::default();
    let admin = config
        .admin_capability()
        .ok_or(eyre!("default config must grant admin"))?;

    let mut store = config
        .store_builder()
        .notifier(Box::new(LogNotifier))
        .build()?;

    store.create(
        &admin,
        Draft::new(
            "Турнир выходного дня",
            "Регистрация на турнир открыта до пятницы.",
            ContentKind::custom("Турниры"),
        ),
    )?;

    // rejected: missing content
    let _ = store.create(&admin, Draft::new("Пусто", "", ContentKind::News));

    store.set_rules_link(&admin, "https://example.com/rules");

    for filter in [Filter::Home, Filter::News, Filter::Updates, Filter::Rules] {
        println!("== {} ==", filter.title());
        for item in store.filter(filter) {
            println!(
                "[{}] {} ({}) - {}",
                item.kind.label(),
                item.title,
                item.date,
                item.content
            );
        }
    }

    println!("rules: {}", store.rules_link());

    Ok(())
}
