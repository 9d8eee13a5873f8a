// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{
    genre::Genre,
    movie::{Movie, Rating, ReleaseYear},
    poster::PosterPath,
};

struct SampleMovie {
    title: &'static str,
    year: ReleaseYear,
    rating: f64,
    genres: &'static [&'static str],
    image: Option<&'static str>,
}

impl SampleMovie {
    fn to_movie(&self) -> Movie {
        let Self {
            title,
            year,
            rating,
            genres,
            image,
        } = self;
        Movie {
            title: (*title).to_owned(),
            year: *year,
            rating: Rating::new(*rating),
            genres: genres.iter().copied().map(Genre::from_static).collect(),
            image: image.map(PosterPath::new),
        }
    }
}

pub(super) fn movies() -> impl Iterator<Item = Movie> {
    SAMPLE_MOVIES.iter().map(SampleMovie::to_movie)
}

// Poster file names are relative to the configured poster directory.
const SAMPLE_MOVIES: &[SampleMovie] = &[
    SampleMovie {
        title: "Space Warriors",
        year: 2018,
        rating: 8.0,
        genres: &["Action", "Sci-Fi"],
        image: Some("WhatsApp Image Nov 4 2025 10 22 AM.jpeg"),
    },
    SampleMovie {
        title: "Bangalore Days",
        year: 2014,
        rating: 8.2,
        genres: &["Romance", "Comedy", "Drama"],
        image: Some("Bangalore Days Poster.jpg"),
    },
    SampleMovie {
        title: "Kahaani",
        year: 2012,
        rating: 8.1,
        genres: &["Thriller", "Mystery"],
        image: Some("WhatsApp Image Nov 4 2025 (1).jpeg"),
    },
    SampleMovie {
        title: "Premam",
        year: 2015,
        rating: 8.2,
        genres: &["Romance", "Comedy"],
        image: Some("1d0248dfb942f6ea6a75d4130c01b727.jpg"),
    },
    SampleMovie {
        title: "Sairat",
        year: 2016,
        rating: 8.6,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 10 27 AM.jpeg"),
    },
    SampleMovie {
        title: "Lucifer",
        year: 2019,
        rating: 8.0,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (3).jpeg"),
    },
    SampleMovie {
        title: "Andhadhun",
        year: 2018,
        rating: 8.3,
        genres: &["Thriller", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (4).jpeg"),
    },
    SampleMovie {
        title: "Uyare",
        year: 2019,
        rating: 8.2,
        genres: &["Drama"],
        image: Some("WhatsApp Image Nov 4 2025 10 22 AM.jpeg"),
    },
    SampleMovie {
        title: "Thappad",
        year: 2020,
        rating: 7.6,
        genres: &["Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (5).jpeg"),
    },
    SampleMovie {
        title: "Soorarai Pottru",
        year: 2020,
        rating: 8.7,
        genres: &["Drama", "Action"],
        image: Some("WhatsApp Image Nov 4 2025 (6).jpeg"),
    },
    SampleMovie {
        title: "Drishyam 2",
        year: 2021,
        rating: 8.5,
        genres: &["Thriller", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (7).jpeg"),
    },
    SampleMovie {
        title: "Joji",
        year: 2021,
        rating: 8.0,
        genres: &["Drama", "Crime"],
        image: Some("WhatsApp Image Nov 4 2025 (8).jpeg"),
    },
    SampleMovie {
        title: "Minnal Murali",
        year: 2021,
        rating: 7.9,
        genres: &["Action", "Comedy"],
        image: Some("WhatsApuhweg2).jpeg"),
    },
    SampleMovie {
        title: "C U Soon",
        year: 2020,
        rating: 7.8,
        genres: &["Thriller", "Mystery"],
        image: Some("nb .jpeg"),
    },
    SampleMovie {
        title: "Kumbalangi Nights",
        year: 2019,
        rating: 8.6,
        genres: &["Drama", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 10 22 AM.jpeg"),
    },
    SampleMovie {
        title: "Bahubali: The Beginning",
        year: 2015,
        rating: 8.1,
        genres: &["Action", "Drama"],
        image: Some("seyfg.jpeg"),
    },
    SampleMovie {
        title: "Bahubali 2: The Conclusion",
        year: 2017,
        rating: 8.2,
        genres: &["Action", "Drama"],
        image: Some("sefs.jpeg"),
    },
    SampleMovie {
        title: "Tumbbad",
        year: 2018,
        rating: 8.3,
        genres: &["Horror", "Fantasy"],
        image: Some("WhatsApp Image Nov 4 2025 10 46 AM.jpeg"),
    },
    SampleMovie {
        title: "Gully Boy",
        year: 2019,
        rating: 8.0,
        genres: &["Drama", "Music"],
        image: Some("sefsg.jpeg"),
    },
    SampleMovie {
        title: "Stree",
        year: 2018,
        rating: 7.6,
        genres: &["Horror", "Comedy"],
        image: Some("rn.jpeg"),
    },
    SampleMovie {
        title: "Virus",
        year: 2019,
        rating: 8.4,
        genres: &["Thriller", "Drama"],
        image: Some("jej.jpeg"),
    },
    SampleMovie {
        title: "Maheshinte Prathikaaram",
        year: 2016,
        rating: 8.2,
        genres: &["Comedy", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 10 49 AM.jpeg"),
    },
    SampleMovie {
        title: "Take Off",
        year: 2017,
        rating: 8.0,
        genres: &["Drama", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (9).jpeg"),
    },
    SampleMovie {
        title: "Kaithi",
        year: 2019,
        rating: 8.5,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 copy 2.jpeg"),
    },
    SampleMovie {
        title: "Master",
        year: 2021,
        rating: 7.6,
        genres: &["Action", "Drama"],
        image: Some("56WhatsApp Image Nov 4 2025 (1).jpeg"),
    },
    SampleMovie {
        title: "Pushpa: The Rise",
        year: 2021,
        rating: 7.3,
        genres: &["Action", "Drama"],
        image: Some("WiihatsApp Image Nov 4 2025 (2).jpeg"),
    },
    SampleMovie {
        title: "Eega",
        year: 2012,
        rating: 7.9,
        genres: &["Fantasy", "Action"],
        image: Some("675879.jpeg"),
    },
    SampleMovie {
        title: "Mahanati",
        year: 2018,
        rating: 8.5,
        genres: &["Biography", "Drama"],
        image: Some("34567.jpeg"),
    },
    SampleMovie {
        title: "Bheeshma",
        year: 2020,
        rating: 7.1,
        genres: &["Comedy", "Romance"],
        image: Some("WhatsApp Image Nov 4 2025 10 59 AM.jpeg"),
    },
    SampleMovie {
        title: "Chhichhore",
        year: 2019,
        rating: 8.2,
        genres: &["Comedy", "Drama"],
        image: Some("34567.jpeg"),
    },
    SampleMovie {
        title: "Delhi Belly",
        year: 2011,
        rating: 7.5,
        genres: &["Comedy"],
        image: Some("34567.jpeg"),
    },
    SampleMovie {
        title: "Piku",
        year: 2015,
        rating: 7.6,
        genres: &["Comedy", "Drama"],
        image: Some("e5768.jpeg"),
    },
    SampleMovie {
        title: "Queen",
        year: 2013,
        rating: 8.2,
        genres: &["Comedy", "Drama"],
        image: Some("786fgu.jpeg"),
    },
    SampleMovie {
        title: "Angry Indian Goddesses",
        year: 2015,
        rating: 7.0,
        genres: &["Comedy", "Drama"],
        image: Some("354stdyui.jpeg"),
    },
    SampleMovie {
        title: "Bareilly Ki Barfi",
        year: 2017,
        rating: 7.7,
        genres: &["Comedy", "Romance"],
        image: Some("ytufi.jpeg"),
    },
    SampleMovie {
        title: "Tamasha",
        year: 2015,
        rating: 7.6,
        genres: &["Romance", "Drama", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (11).jpeg"),
    },
    SampleMovie {
        title: "OMG! Oh My God",
        year: 2012,
        rating: 8.1,
        genres: &["Comedy", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025.jpeg"),
    },
    SampleMovie {
        title: "Jaane Bhi Do Yaaro",
        year: 1983,
        rating: 8.4,
        genres: &["Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (12).jpeg"),
    },
    SampleMovie {
        title: "Kuch Kuch Hota Hai",
        year: 1998,
        rating: 7.6,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (13).jpeg"),
    },
    SampleMovie {
        title: "Barfi!",
        year: 2012,
        rating: 8.1,
        genres: &["Romance", "Comedy", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (14).jpeg"),
    },
    SampleMovie {
        title: "Love Aaj Kal",
        year: 2009,
        rating: 6.6,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (15).jpeg"),
    },
    SampleMovie {
        title: "Veer-Zaara",
        year: 2004,
        rating: 7.8,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (16).jpeg"),
    },
    SampleMovie {
        title: "Saathiya",
        year: 2002,
        rating: 7.6,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (17).jpeg"),
    },
    SampleMovie {
        title: "Lootera",
        year: 2013,
        rating: 7.4,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (18).jpeg"),
    },
    SampleMovie {
        title: "Raja Hindustani",
        year: 1996,
        rating: 6.8,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (19).jpeg"),
    },
    SampleMovie {
        title: "Jab We Met",
        year: 2007,
        rating: 7.9,
        genres: &["Romance", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (20).jpeg"),
    },
    SampleMovie {
        title: "Rehnaa Hai Terre Dil Mein",
        year: 2001,
        rating: 7.4,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (21).jpeg"),
    },
    SampleMovie {
        title: "Ek Ladki Ko Dekha To Aisa Laga",
        year: 2019,
        rating: 7.4,
        genres: &["Romance", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (22).jpeg"),
    },
    SampleMovie {
        title: "Talaash",
        year: 2012,
        rating: 7.2,
        genres: &["Thriller", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (23).jpeg"),
    },
    SampleMovie {
        title: "Pink",
        year: 2016,
        rating: 8.1,
        genres: &["Thriller", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (24).jpeg"),
    },
    SampleMovie {
        title: "Kahaani 2",
        year: 2016,
        rating: 6.6,
        genres: &["Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (25).jpeg"),
    },
    SampleMovie {
        title: "A Wednesday!",
        year: 2008,
        rating: 8.1,
        genres: &["Thriller", "Crime"],
        image: Some("WhatsApp Image Nov 4 2025 (26).jpeg"),
    },
    SampleMovie {
        title: "Badlapur",
        year: 2015,
        rating: 7.6,
        genres: &["Thriller", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (27).jpeg"),
    },
    SampleMovie {
        title: "Drishyam (Hindi)",
        year: 2015,
        rating: 7.7,
        genres: &["Thriller", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (28).jpeg"),
    },
    SampleMovie {
        title: "NH10",
        year: 2015,
        rating: 7.0,
        genres: &["Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (29).jpeg"),
    },
    SampleMovie {
        title: "Special 26",
        year: 2013,
        rating: 7.8,
        genres: &["Thriller", "Crime"],
        image: Some("WhatsApp Image Nov 4 2025 (30).jpeg"),
    },
    SampleMovie {
        title: "Talvar",
        year: 2015,
        rating: 8.1,
        genres: &["Mystery", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (31).jpeg"),
    },
    SampleMovie {
        title: "KGF",
        year: 2018,
        rating: 8.2,
        genres: &["Action", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (32).jpeg"),
    },
    SampleMovie {
        title: "War",
        year: 2019,
        rating: 6.5,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (33).jpeg"),
    },
    SampleMovie {
        title: "Saaho",
        year: 2019,
        rating: 5.5,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (34).jpeg"),
    },
    SampleMovie {
        title: "Raees",
        year: 2017,
        rating: 7.2,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (35).jpeg"),
    },
    SampleMovie {
        title: "Ghajini",
        year: 2008,
        rating: 7.6,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (36).jpeg"),
    },
    SampleMovie {
        title: "Dhoom 2",
        year: 2006,
        rating: 7.2,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (37).jpeg"),
    },
    SampleMovie {
        title: "Holiday",
        year: 2014,
        rating: 7.9,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (38).jpeg"),
    },
    SampleMovie {
        title: "Ra.One",
        year: 2011,
        rating: 4.9,
        genres: &["Sci-Fi", "Action"],
        image: Some("WhatsApp Image Nov 4 2025 (39).jpeg"),
    },
    SampleMovie {
        title: "Don",
        year: 2006,
        rating: 7.8,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (40).jpeg"),
    },
    SampleMovie {
        title: "Gabbar Is Back",
        year: 2015,
        rating: 6.6,
        genres: &["Action", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (41).jpeg"),
    },
    SampleMovie {
        title: "Pari",
        year: 2018,
        rating: 6.0,
        genres: &["Horror"],
        image: Some("WhatsApp Image Nov 4 2025 (42).jpeg"),
    },
    SampleMovie {
        title: "Raaz",
        year: 2002,
        rating: 6.2,
        genres: &["Horror", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (43).jpeg"),
    },
    SampleMovie {
        title: "Pizza",
        year: 2012,
        rating: 7.0,
        genres: &["Horror", "Mystery"],
        image: Some("WhatsApp Image Nov 4 2025 (44).jpeg"),
    },
    SampleMovie {
        title: "1920",
        year: 2008,
        rating: 5.6,
        genres: &["Horror", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (45).jpeg"),
    },
    SampleMovie {
        title: "Ragini MMS",
        year: 2011,
        rating: 5.4,
        genres: &["Horror"],
        image: Some("WhatsApp Image Nov 4 2025 (46).jpeg"),
    },
    SampleMovie {
        title: "Anand",
        year: 1971,
        rating: 9.0,
        genres: &["Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (47).jpeg"),
    },
    SampleMovie {
        title: "Stanley Ka Dabba",
        year: 2011,
        rating: 8.0,
        genres: &["Drama", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (48).jpeg"),
    },
    SampleMovie {
        title: "Masaan",
        year: 2015,
        rating: 8.1,
        genres: &["Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (49).jpeg"),
    },
    SampleMovie {
        title: "October",
        year: 2018,
        rating: 7.7,
        genres: &["Drama", "Romance"],
        image: Some("WhatsApp Image Nov 4 2025 (50).jpeg"),
    },
    SampleMovie {
        title: "Kapoor & Sons",
        year: 2016,
        rating: 7.7,
        genres: &["Drama", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (51).jpeg"),
    },
    SampleMovie {
        title: "Taare Zameen Par",
        year: 2007,
        rating: 8.4,
        genres: &["Drama", "Family"],
        image: Some("WhatsApp Image Nov 4 2025 (52).jpeg"),
    },
    SampleMovie {
        title: "Lunchbox",
        year: 2013,
        rating: 8.0,
        genres: &["Drama", "Romance"],
        image: Some("WhatsApp Image Nov 4 2025 (53).jpeg"),
    },
    SampleMovie {
        title: "Chhapaak",
        year: 2020,
        rating: 7.1,
        genres: &["Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (54).jpeg"),
    },
    SampleMovie {
        title: "PK",
        year: 2014,
        rating: 8.1,
        genres: &["Sci-Fi", "Comedy"],
        image: Some("WhatsApp Image Nov 4 2025 (55).jpeg"),
    },
    SampleMovie {
        title: "Cargo",
        year: 2019,
        rating: 7.3,
        genres: &["Sci-Fi", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (56).jpeg"),
    },
    SampleMovie {
        title: "Ra.One",
        year: 2011,
        rating: 4.9,
        genres: &["Sci-Fi", "Action"],
        image: Some("WhatsApp Image Nov 4 2025 (58).jpeg"),
    },
    SampleMovie {
        title: "Tik Tik Tik",
        year: 2018,
        rating: 6.1,
        genres: &["Sci-Fi", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (59).jpeg"),
    },
    SampleMovie {
        title: "Talvar",
        year: 2015,
        rating: 8.1,
        genres: &["Mystery", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (57).jpeg"),
    },
    SampleMovie {
        title: "Badla",
        year: 2019,
        rating: 7.8,
        genres: &["Mystery", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (58).jpeg"),
    },
    SampleMovie {
        title: "Ittefaq",
        year: 2017,
        rating: 7.0,
        genres: &["Mystery", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (59).jpeg"),
    },
    SampleMovie {
        title: "Miruthan",
        year: 2016,
        rating: 6.1,
        genres: &["Fantasy", "Action"],
        image: Some("WhatsApp Image Nov 4 2025 (60).jpeg"),
    },
    SampleMovie {
        title: "7aum Arivu",
        year: 2011,
        rating: 6.3,
        genres: &["Fantasy", "Thriller"],
        image: Some("WhatsApp Image Nov 4 2025 (61).jpeg"),
    },
    SampleMovie {
        title: "Raavan",
        year: 2010,
        rating: 6.2,
        genres: &["Fantasy", "Action"],
        image: Some("WhatsApp Image Nov 4 2025 (62).jpeg"),
    },
    SampleMovie {
        title: "Neerja",
        year: 2016,
        rating: 8.0,
        genres: &["Biography", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (63).jpeg"),
    },
    SampleMovie {
        title: "Dangal",
        year: 2016,
        rating: 8.4,
        genres: &["Biography", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (64).jpeg"),
    },
    SampleMovie {
        title: "MS Dhoni: The Untold Story",
        year: 2016,
        rating: 9.7,
        genres: &["Biography", "Drama"],
        image: Some("WhatsApp Image Nov 4 2025 (65).jpeg"),
    },
    SampleMovie {
        title: "Rockstar",
        year: 2011,
        rating: 7.9,
        genres: &["Drama", "Music"],
        image: Some("WhatsApp Image Nov 4 2025 (66).jpeg"),
    },
    SampleMovie {
        title: "Aashiqui 2",
        year: 2013,
        rating: 7.1,
        genres: &["Drama", "Music"],
        image: Some("WhatsApp Image Nov 4 2025 (67).jpeg"),
    },
    SampleMovie {
        title: "Secret Superstar",
        year: 2017,
        rating: 7.8,
        genres: &["Drama", "Music"],
        image: Some("WhatsApp Image Nov 4 2025 (68).jpeg"),
    },
];
