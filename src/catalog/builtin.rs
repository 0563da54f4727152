use super::GameEntry;

fn entry(
    id: &str,
    title: &str,
    description: &str,
    thumbnail: &str,
    url: &str,
    category: &str,
) -> GameEntry {
    GameEntry {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        thumbnail: thumbnail.to_owned(),
        url: url.to_owned(),
        category: category.to_owned(),
    }
}

/// Games shipped with the service.
pub(super) fn games() -> Vec<GameEntry> {
    vec![
        entry(
            "Code-dash",
            "Code-dash",
            "A stealth game disguised as a code editor. Avoid errors and fix bugs!",
            "/thumbnails/codedash.png",
            "https://game1-xi-snowy.vercel.app/",
            "Action",
        ),
        entry(
            "neon-racer",
            "Neon Racer",
            "Navigate data streams and avoid firewalls in this terminal-based racer. Press ESC for stealth mode.",
            "/thumbnails/neon-racer.png",
            "https://hidden-desk-ptvg.vercel.app",
            "Racing",
        ),
        entry(
            "pixel-quest",
            "Pixel Quest",
            "Defend your canvas from glitch pixels in this paint-tool disguised RPG. Press ESC to switch to work mode.",
            "/thumbnails/pixel-quest.png",
            "https://hidden-desk-9hye.vercel.app/",
            "RPG",
        ),
    ]
}
