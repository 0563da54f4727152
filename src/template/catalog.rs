use askama::Template;

use crate::catalog::{Catalog, GameEntry};

/// Html grid with one card per game.
#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogFragment<'a> {
    pub games: Vec<&'a GameEntry>,
}

impl<'a> From<&'a Catalog> for CatalogFragment<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        Self {
            games: catalog.entries().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn game(id: &str, title: &str, url: &str) -> GameEntry {
        GameEntry {
            id: id.to_owned(),
            title: title.to_owned(),
            description: "An epic 8-bit adventure awaits.".to_owned(),
            thumbnail: "/thumbnails/pixel-quest.png".to_owned(),
            url: url.to_owned(),
            category: "RPG".to_owned(),
        }
    }

    #[test]
    fn test_render_cards() {
        let catalog = Catalog::from_entries([
            game("vscode-stealth", "VS Code Stealth Runner", "https://vscode-stealth-game-deploy.vercel.app"),
            game("coming-soon-2", "Pixel Quest", "#"),
        ])
        .unwrap();
        let html = CatalogFragment::from(&catalog).render().unwrap();

        assert_eq!(2, html.matches("data-game-id=").count());
        assert!(html.contains("Play Now"));
        assert!(html.contains("Coming Soon"));
        assert!(html.find("VS Code Stealth Runner").unwrap() < html.find("Pixel Quest").unwrap());
    }

    #[test]
    fn test_render_escapes_text() {
        let catalog = Catalog::from_entries([game("x", "<script>alert(1)</script>", "#")]).unwrap();
        let html = CatalogFragment::from(&catalog).render().unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
