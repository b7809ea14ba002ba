pub mod actor;
pub mod genero;
pub mod pelicula;
pub mod pelicula_actor;
