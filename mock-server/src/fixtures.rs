//! Seville 2017 sample data. Sessions are listed out of time order on
//! purpose so clients have something to sort.

use crate::{Catalog, Session, Speaker};

fn session(id: &str, title: &str, start: &str, end: &str, room: &str, speakers: &[&str]) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        room: room.to_string(),
        speakers: speakers.iter().map(|s| s.to_string()).collect(),
    }
}

fn speaker(id: &str, name: &str, company: Option<&str>, twitter: Option<&str>) -> Speaker {
    Speaker {
        id: id.to_string(),
        name: name.to_string(),
        company: company.map(str::to_string),
        twitter: twitter.map(str::to_string),
    }
}

pub fn seville_2017() -> Catalog {
    let mut catalog = Catalog::default();

    catalog.programs.insert(
        126,
        vec![
            session("1261", "Sprint kickoff", "10:00", "10:30", "Sprint room", &["3"]),
            session("1260", "Registration", "09:00", "10:00", "Hall", &[]),
            session("1262", "Contribution sprint", "10:30", "18:00", "Sprint room", &[]),
        ],
    );
    catalog.programs.insert(
        127,
        vec![
            session("1272", "Configuration management deep dive", "11:30", "12:15", "Room 1", &["2"]),
            session("1270", "Opening keynote", "09:30", "10:30", "Auditorium", &["1"]),
            session("1271", "Coffee break", "10:30", "11:00", "Hall", &[]),
            session("1273", "Decoupled frontends", "11:30", "12:15", "Room 2", &["4", "5"]),
        ],
    );
    catalog.programs.insert(
        128,
        vec![
            session("1281", "Caching strategies", "12:00", "12:45", "Room 1", &["6"]),
            session("1280", "Testing with PHPUnit", "10:00", "10:45", "Room 2", &["2"]),
        ],
    );
    catalog.programs.insert(
        129,
        vec![
            session("1291", "Closing keynote", "17:00", "18:00", "Auditorium", &["1"]),
            session("1290", "Migrate API in practice", "10:00", "10:45", "Room 1", &["5"]),
        ],
    );
    catalog.programs.insert(
        130,
        vec![session("1300", "Sprint day", "09:00", "17:00", "Sprint room", &["3"])],
    );

    for s in [
        speaker("1", "Laura Romero", Some("Acme Digital"), Some("@lromero")),
        speaker("2", "Pablo Ortega", Some("Sevilla Labs"), None),
        speaker("3", "Marta Gil", None, Some("@martagil")),
        speaker("4", "Jonas Berg", Some("Nordweb"), None),
        speaker("5", "Ines Duarte", None, None),
        speaker("6", "Tom Hale", Some("Hale & Co"), Some("@tomhale")),
    ] {
        catalog.speakers.insert(s.id.clone(), s);
    }

    catalog
}
