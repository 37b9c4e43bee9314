//! Sound buffers and playback through `rodio`.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

/// Encoded sound file kept in memory; decoded again for every playback.
#[derive(Debug, Clone)]
pub struct SoundBuffer {
    path: PathBuf,
    bytes: Arc<[u8]>,
}

impl SoundBuffer {
    /// Reads `path` and checks that it decodes.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes: Arc<[u8]> = std::fs::read(path)
            .with_context(|| format!("cannot read sound {}", path.display()))?
            .into();

        let sound = Self { path: path.to_path_buf(), bytes };
        sound.decoder()?;
        Ok(sound)
    }

    fn decoder(&self) -> Result<rodio::Decoder<Cursor<Arc<[u8]>>>> {
        rodio::Decoder::new(Cursor::new(self.bytes.clone()))
            .with_context(|| format!("cannot decode sound {}", self.path.display()))
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Audio output device. Opened lazily on first playback.
#[derive(Default)]
pub struct AudioOut {
    stream: Option<(rodio::OutputStream, rodio::OutputStreamHandle)>,
}

impl AudioOut {
    /// Starts playing `sound` and returns immediately.
    pub fn play(&mut self, sound: &SoundBuffer) -> Result<()> {
        if self.stream.is_none() {
            let stream = rodio::OutputStream::try_default().context("cannot open audio output")?;
            self.stream = Some(stream);
        }
        let Some((_, handle)) = &self.stream else {
            return Ok(());
        };

        let source = sound.decoder()?;
        let sink = rodio::Sink::try_new(handle).context("cannot create audio sink")?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_keeps_file_bytes() {
        let path = testing::write_wav("load");
        let snd = SoundBuffer::load(&path).unwrap();
        assert_eq!(snd.len(), 44 + 128);
        assert_eq!(snd.path(), path.as_path());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(SoundBuffer::load(Path::new("/nonexistent/beep.wav")).is_err());
    }

    #[test]
    fn undecodable_file_is_an_error() {
        let path = testing::write_not_audio("garbage");
        let err = SoundBuffer::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("cannot decode sound"));
    }
}
