use hitit::error::AppResult;

fn main() -> AppResult<()> {
    hitit::entry::run()
}
