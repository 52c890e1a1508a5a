//! Subcommand handlers.
//!
//! Remote failures degrade to empty views with a warning log; empty results
//! get an explicit "nothing here" line, distinct from errors. The process
//! never exits nonzero for a transport failure.

use std::sync::Arc;

use goroku_api::types::{Quote, QuoteFilter};
use goroku_api::{QuoteApiClient, QuoteSource};
use goroku_core::carousel::CarouselScheduler;
use goroku_core::config::AppConfig;
use goroku_core::favorites::{Favorites, FavoritesView};
use goroku_core::filter;
use goroku_core::search::{query_from_url, SearchController};
use goroku_core::soft;
use goroku_core::store::FileStore;

fn print_quote(quote: &Quote) {
    println!("\"{}\"", quote.text);
    println!("    — {}, {}  [{}]", quote.character, quote.anime, quote.id);
}

pub async fn anime_list(client: &Arc<QuoteApiClient>) {
    let list = soft::or_empty("list_anime", client.list_anime()).await;
    if list.is_empty() {
        println!("No anime found.");
        return;
    }
    for anime in &list {
        let year = anime
            .release_year
            .map(|y| format!(" ({y})"))
            .unwrap_or_default();
        println!(
            "{:<20} {}{year} — {} quotes",
            anime.slug, anime.name, anime.total_quotes
        );
    }
}

pub async fn anime_show(client: &Arc<QuoteApiClient>, slug: &str) {
    let quote_filter = QuoteFilter::anime(slug);
    let (anime, quotes, characters) = futures::join!(
        soft::or_empty("get_anime", client.get_anime(slug)),
        soft::or_empty("list_quotes", client.list_quotes(&quote_filter)),
        soft::or_empty("list_characters", client.list_characters(Some(slug))),
    );
    let Some(anime) = anime else {
        println!("Anime {slug:?} not found.");
        return;
    };

    println!("{} — {}", anime.name, anime.japanese_name);
    println!("{}", anime.description);
    if !characters.is_empty() {
        println!("\nCharacters:");
        for character in &characters {
            println!("  {:<20} {}", character.slug, character.name);
        }
    }
    if quotes.is_empty() {
        println!("\nNo quotes.");
    } else {
        println!("\nQuotes:");
        for quote in &quotes {
            print_quote(quote);
        }
    }
}

pub async fn characters(client: &Arc<QuoteApiClient>, anime_slug: Option<&str>) {
    let list = soft::or_empty("list_characters", client.list_characters(anime_slug)).await;
    if list.is_empty() {
        println!("No characters found.");
        return;
    }
    for character in &list {
        println!(
            "{:<20} {} ({}) — {} quotes",
            character.slug, character.name, character.anime, character.total_quotes
        );
    }
}

pub async fn character_show(client: &Arc<QuoteApiClient>, slug: &str) {
    let quote_filter = QuoteFilter::character(slug);
    let (character, quotes) = futures::join!(
        soft::or_empty("get_character", client.get_character(slug)),
        soft::or_empty("list_quotes", client.list_quotes(&quote_filter)),
    );
    let Some(character) = character else {
        println!("Character {slug:?} not found.");
        return;
    };

    println!("{} — {}", character.name, character.anime);
    if let Some(ref bio) = character.bio {
        println!("{bio}");
    }
    if quotes.is_empty() {
        println!("\nNo quotes.");
    } else {
        println!();
        for quote in &quotes {
            print_quote(quote);
        }
    }
}

pub async fn quotes(
    client: &Arc<QuoteApiClient>,
    server_filter: QuoteFilter,
    character: Option<&str>,
) {
    let fetched = soft::or_empty("list_quotes", client.list_quotes(&server_filter)).await;
    let shown = filter::by_character(&fetched, character);
    if shown.is_empty() {
        println!("No quotes.");
        return;
    }
    for quote in &shown {
        print_quote(quote);
    }
    if let Some(name) = character {
        println!(
            "\n{} of {} fetched quotes match character {name:?}",
            shown.len(),
            fetched.len()
        );
    }
}

pub async fn search(client: Arc<QuoteApiClient>, raw: &str, config: &AppConfig) {
    let query = query_from_url(raw).unwrap_or_else(|| raw.to_string());
    let controller = SearchController::with_query(client, &query);
    controller.submit().await;
    if !controller.searched() {
        println!("Nothing to search for.");
        return;
    }

    let results = controller.results();
    if results.is_empty() {
        println!("No results for {query:?}.");
        return;
    }
    println!("{} result(s) for {query:?}:\n", results.len());
    for quote in &results {
        print_quote(quote);
    }
    if let Ok(base) = config.base_url() {
        if let Ok(page) = base.join("/search") {
            println!("\nshare: {}", controller.share_url(&page));
        }
    }
}

pub async fn featured(client: &Arc<QuoteApiClient>, watch: bool) {
    let quotes = soft::or_empty("featured_quotes", client.featured_quotes()).await;
    if quotes.is_empty() {
        println!("No featured quotes.");
        return;
    }
    if !watch {
        for quote in &quotes {
            print_quote(quote);
        }
        return;
    }

    let mut scheduler = CarouselScheduler::start(quotes);
    if let Some(quote) = scheduler.current() {
        print_quote(&quote);
    }
    // Follow the scheduler's own ticks rather than a second timer, so the
    // output never drifts out of phase with the rotation.
    let mut ticks = scheduler.subscribe();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = ticks.changed() => {
                if changed.is_err() {
                    break;
                }
                if let Some(quote) = scheduler.current() {
                    print_quote(&quote);
                }
            }
        }
    }
    scheduler.shutdown();
}

pub async fn favorites_list(client: Arc<QuoteApiClient>) {
    let mut view = FavoritesView::new(client, Favorites::new(FileStore::open_default()));
    view.load().await;
    if view.quotes().is_empty() {
        println!("No favorites yet. Save one with `goroku favorites add <id>`.");
        return;
    }
    println!("{} favorite(s):\n", view.quotes().len());
    for quote in view.quotes() {
        print_quote(quote);
    }
}

pub fn favorites_add(id: &str) {
    let favorites = Favorites::new(FileStore::open_default());
    if favorites.add(id) {
        println!("Saved {id:?}.");
    } else {
        println!("{id:?} is already in your favorites.");
    }
}

pub async fn favorites_remove(client: Arc<QuoteApiClient>, id: &str) {
    let mut view = FavoritesView::new(client, Favorites::new(FileStore::open_default()));
    view.load().await;
    if !view.favorites().contains(id) {
        println!("{id:?} is not in your favorites.");
        return;
    }
    view.remove(id);
    println!("Removed {id:?}. {} favorite(s) remain.", view.quotes().len());
}
