//! HTML pages and fragments, filled from the templates under `res/pages`.
//!
//! Placeholders holding user-supplied text are always substituted last so a
//! name like `{points}` is never expanded.

use crate::{
    include_res,
    quiz::{Room, Standing},
};

pub fn page(title: &str, content: &str) -> String {
    include_res!(str, "/pages/base.html")
        .replace("{title}", &escape(title))
        .replace("{content}", content)
}

pub fn home(rooms: &[std::sync::Arc<Room>]) -> String {
    let mut room_items = String::new();
    for room in rooms {
        let info = room.info();
        room_items += &include_res!(str, "/pages/room_item.html")
            .replace("{slug}", &escape(&info.slug))
            .replace("{image}", &escape(&info.image))
            .replace("{name}", &escape(&info.name));
    }

    page(
        "Quiz Rooms",
        &include_res!(str, "/pages/home.html").replace("{room_items}", &room_items),
    )
}

/// Join form shown to callers we don't recognize.
pub fn login(room: &Room) -> String {
    let info = room.info();
    page(
        &info.name,
        &include_res!(str, "/pages/login.html")
            .replace("{slug}", &escape(&info.slug))
            .replace("{image}", &escape(&info.image))
            .replace("{name}", &escape(&info.name)),
    )
}

pub fn game(room: &Room, standings: &[Standing]) -> String {
    let info = room.info();
    page(
        &info.name,
        &include_res!(str, "/pages/game.html")
            .replace("{slug}", &escape(&info.slug))
            .replace("{image}", &escape(&info.image))
            .replace("{name}", &escape(&info.name))
            .replace("{scoreboard}", &scoreboard(standings)),
    )
}

pub fn scoreboard(standings: &[Standing]) -> String {
    let mut rows = String::new();
    for standing in standings {
        rows += &include_res!(str, "/pages/score_row.html")
            .replace("{points}", &standing.points.to_string())
            .replace("{name}", &escape(&standing.name));
    }

    include_res!(str, "/pages/scoreboard.html").replace("{rows}", &rows)
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{RoomInfo, catalog};

    fn standing(name: &str, points: i64) -> Standing {
        Standing {
            name: name.to_owned(),
            points,
        }
    }

    #[test]
    fn test_scoreboard_keeps_order_and_points() {
        let html = scoreboard(&[standing("Alice", 1), standing("Bob", 0)]);

        let alice = html.find("Alice").unwrap();
        let bob = html.find("Bob").unwrap();
        assert!(alice < bob);
        assert!(html.contains(r#"<span class="points">1</span>"#));
        assert!(html.contains(r#"<span class="points">0</span>"#));
    }

    #[test]
    fn test_scoreboard_escapes_names() {
        let html = scoreboard(&[standing("<script>alert('x')</script>", 0)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_placeholder_in_name_is_not_expanded() {
        let html = scoreboard(&[standing("{points}", 42)]);
        assert!(html.contains(r#"<span class="name">{points}</span>"#));
    }

    #[test]
    fn test_home_lists_every_room() {
        let rooms: Vec<_> = catalog::builtin()
            .into_iter()
            .map(|info| std::sync::Arc::new(Room::new(info)))
            .collect();

        let html = home(&rooms);
        assert!(html.contains(r#"href="/room/classic-rock""#));
        assert!(html.contains(r#"href="/room/pop-hits""#));
        assert!(html.contains("Pop Hits"));
    }

    #[test]
    fn test_login_and_game_pages() {
        let room = Room::new(RoomInfo {
            name: "Classic Rock".to_owned(),
            slug: "classic-rock".to_owned(),
            image: "/web/images/guitar.svg".to_owned(),
        });

        assert!(login(&room).contains(r#"hx-post="/room/classic-rock/join""#));

        let html = game(&room, &[standing("Alice", 3)]);
        assert!(html.contains(r#"hx-post="/room/classic-rock/answer""#));
        assert!(html.contains(r#"sse-connect="/events?stream=classic-rock""#));
        assert!(html.contains("Alice"));
    }
}
