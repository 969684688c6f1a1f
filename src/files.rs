//! # Almacenamiento de Archivos
//! src/files.rs
//!
//! Cada nombre pedido en `/files/<nombre>` se guarda como
//! `<directorio>/<nombre>.txt`. No hay locking: dos escrituras
//! concurrentes al mismo nombre compiten y gana la última.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensión fija que se agrega a cada nombre
const FILE_SUFFIX: &str = "txt";

/// Directorio de archivos servido por `/files/`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Un nombre es válido si es un único componente normal del path.
    ///
    /// El router ya cortó en `/`, pero en Windows `\` también separa.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
    }

    /// Ruta en disco para `name`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, FILE_SUFFIX))
    }

    /// Lee el archivo; `Ok(None)` si no existe
    pub fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Crea o trunca el archivo con `content`
    ///
    /// El directorio se crea si todavía no existe.
    pub fn write(&self, name: &str, content: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(name), content)
    }
}
