use std::collections::HashMap;

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::entities::{actor, genero};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Actor {
    pub actor_id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<actor::Model> for Actor {
    fn from(m: actor::Model) -> Self {
        Self { actor_id: m.actor_id, first_name: m.nombre_actor, last_name: m.apellidos_actor }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Genre {
    pub genre_id: i32,
    pub name: String,
}

impl From<genero::Model> for Genre {
    fn from(m: genero::Model) -> Self {
        Self { genre_id: m.genero_id, name: m.nombre_genero }
    }
}

/// A movie with its genre and cast. `movie_id` is zero until the movie is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    pub movie_id: i32,
    pub title: String,
    pub subtitled: bool,
    pub released: bool,
    pub genre: Genre,
    pub actors: Vec<Actor>,
}

/// One row of the movie/genre/cast join: a movie repeated once per linked actor.
#[derive(Clone, Debug, FromQueryResult)]
pub struct MovieRow {
    pub pelicula_id: i32,
    pub titulo: String,
    pub subtitulada: bool,
    pub estreno: bool,
    pub genero_id: i32,
    pub nombre_genero: String,
    pub actor_id: i32,
    pub nombre_actor: String,
    pub apellidos_actor: String,
}

/// Folds flattened join rows back into movies.
///
/// Each movie is materialized on the first row carrying its id; every row then
/// contributes its actor. Movies keep first-encounter order and actors keep
/// row order.
pub fn group_movie_rows(rows: impl IntoIterator<Item = MovieRow>) -> Vec<Movie> {
    let mut movies: Vec<Movie> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.pelicula_id).or_insert_with(|| {
            movies.push(Movie {
                movie_id: row.pelicula_id,
                title: row.titulo.clone(),
                subtitled: row.subtitulada,
                released: row.estreno,
                genre: Genre { genre_id: row.genero_id, name: row.nombre_genero.clone() },
                actors: Vec::new(),
            });
            movies.len() - 1
        });

        movies[slot].actors.push(Actor {
            actor_id: row.actor_id,
            first_name: row.nombre_actor,
            last_name: row.apellidos_actor,
        });
    }

    movies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(movie: i32, title: &str, actor: i32, first: &str) -> MovieRow {
        MovieRow {
            pelicula_id: movie,
            titulo: title.to_string(),
            subtitulada: true,
            estreno: false,
            genero_id: 7,
            nombre_genero: "Action".to_string(),
            actor_id: actor,
            nombre_actor: first.to_string(),
            apellidos_actor: "Doe".to_string(),
        }
    }

    #[test]
    fn groups_interleaved_rows_by_movie() {
        let rows = vec![
            row(2, "Matrix 2", 10, "Keanu"),
            row(1, "Matrix 1", 10, "Keanu"),
            row(2, "Matrix 2", 11, "Carrie"),
            row(1, "Matrix 1", 12, "Laurence"),
            row(2, "Matrix 2", 12, "Laurence"),
        ];

        let movies = group_movie_rows(rows);

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].movie_id, 2);
        assert_eq!(movies[1].movie_id, 1);

        let cast: Vec<i32> = movies[0].actors.iter().map(|a| a.actor_id).collect();
        assert_eq!(cast, vec![10, 11, 12]);
        let cast: Vec<i32> = movies[1].actors.iter().map(|a| a.actor_id).collect();
        assert_eq!(cast, vec![10, 12]);

        assert_eq!(movies[1].genre, Genre { genre_id: 7, name: "Action".to_string() });
        assert!(movies[1].subtitled);
        assert!(!movies[1].released);
    }

    #[test]
    fn no_rows_means_no_movies() {
        assert!(group_movie_rows(Vec::new()).is_empty());
    }

    #[test]
    fn movie_json_uses_camel_case_and_defaults() {
        let movie: Movie = serde_json::from_str(
            r#"{"title":"Matrix 1","subtitled":true,
                "genre":{"genreId":3},"actors":[{"actorId":5}]}"#,
        )
        .unwrap();

        assert_eq!(movie.movie_id, 0);
        assert!(!movie.released);
        assert_eq!(movie.genre.genre_id, 3);
        assert_eq!(movie.actors[0].actor_id, 5);
        assert!(movie.actors[0].first_name.is_empty());

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["movieId"], 0);
        assert_eq!(json["actors"][0]["firstName"], "");
    }
}
