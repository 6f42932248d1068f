//! The fixed case of the final chapter: a seven-room mansion and the
//! clue/suspect associations the evidence points at.

use crate::rooms::Room;
use crate::suspects::{DirectoryError, SuspectDirectory};

/// Mansion map. The hall branches into the library wing (left) and the
/// kitchen wing (right); every room but the sitting room holds a clue.
pub fn mansion() -> Room {
    Room::with_clue("Hall de Entrada", "Pegadas de lama no tapete")
        .with_left(
            Room::with_clue("Biblioteca", "Livro fora do lugar")
                .with_left(Room::new("Sala de Estar"))
                .with_right(Room::with_clue("Sótão", "Janela aberta")),
        )
        .with_right(
            Room::with_clue("Cozinha", "Faca sumida do suporte")
                .with_left(Room::with_clue("Jardim", "Pegadas recentes na terra"))
                .with_right(Room::with_clue("Porão", "Chave caída no chão")),
        )
}

/// Who each clue implicates, fixed at case-writing time.
pub fn suspect_directory(capacity: usize) -> Result<SuspectDirectory, DirectoryError> {
    let mut directory = SuspectDirectory::with_capacity(capacity)?;
    directory.insert("Pegadas de lama no tapete", "Sr. Green");
    directory.insert("Livro fora do lugar", "Sra. White");
    directory.insert("Faca sumida do suporte", "Coronel Mustard");
    directory.insert("Janela aberta", "Sr. Green");
    directory.insert("Pegadas recentes na terra", "Sr. Green");
    directory.insert("Chave caída no chão", "Sra. White");
    Ok(directory)
}
