use prewarm_deck::error::AppResult;

fn main() -> AppResult<()> {
    prewarm_deck::entry::run()
}
