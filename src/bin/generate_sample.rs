//! Write a small synthetic catalog CSV so the analyzer can be exercised
//! without the real dataset: `cargo run --bin generate_sample`.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}

const COUNTRIES: [&str; 8] = [
    "United States",
    "India",
    "United Kingdom",
    "Japan",
    "South Korea",
    "Spain",
    "France",
    "", // some rows have no country
];

const GENRE_SETS: [&str; 7] = [
    "Dramas, International Movies",
    "Comedies",
    "Documentaries",
    "Action & Adventure, Sci-Fi & Fantasy",
    "Kids' TV",
    "Crime TV Shows, TV Dramas",
    "Stand-Up Comedy",
];

const RATINGS: [&str; 6] = ["TV-MA", "TV-14", "PG-13", "PG", "R", "TV-Y"];

const DIRECTORS: [&str; 6] = [
    "Martin Scorsese",
    "Bong Joon-ho",
    "Greta Gerwig",
    "Anurag Kashyap",
    "", // missing director
    "",
];

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

fn main() {
    let mut rng = SimpleRng::new(42);
    let rows = 500;

    let output_path = "dataset/netflix_titles.csv";
    std::fs::create_dir_all("dataset").expect("Failed to create dataset directory");
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "show_id", "type", "title", "director", "cast", "country", "date_added",
            "release_year", "rating", "duration", "listed_in",
        ])
        .expect("Failed to write header");

    for i in 0..rows {
        let is_movie = rng.next_u64() % 10 < 7;
        let kind = if is_movie { "Movie" } else { "TV Show" };
        let duration = if is_movie {
            format!("{} min", rng.range(45, 180))
        } else {
            let seasons = rng.range(1, 9);
            format!("{} Season{}", seasons, if seasons == 1 { "" } else { "s" })
        };

        let year = rng.range(2014, 2022);
        let date_added = format!("{} {}, {}", rng.choose(&MONTHS), rng.range(1, 29), year);
        let release_year = rng.range(1990, year + 1).to_string();

        // A handful of rows get a blank rating, mirroring the real export.
        let rating = if rng.next_u64() % 100 < 2 {
            ""
        } else {
            *rng.choose(&RATINGS)
        };

        let show_id = format!("s{i}");
        let title = format!("Title {i}");
        writer
            .write_record([
                show_id.as_str(),
                kind,
                title.as_str(),
                *rng.choose(&DIRECTORS),
                "Cast A, Cast B",
                *rng.choose(&COUNTRIES),
                date_added.as_str(),
                release_year.as_str(),
                rating,
                duration.as_str(),
                *rng.choose(&GENRE_SETS),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} catalog rows to {output_path}");
}
