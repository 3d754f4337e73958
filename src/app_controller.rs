use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::change_detection::{document_change_time, needs_translation};
use crate::file_utils::FileManager;
use crate::markdown::fingerprint;
use crate::run_state::RunState;
use crate::translation::{
    ChunkObserver, ChunkTranslator, DebugDumpObserver, DocumentTranslator, NoopObserver,
    TranslationService,
};

// @module: Application controller for the document tree walk

/// Main application controller for incremental document translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Run the whole tree walk against the configured provider
    pub async fn run(&self) -> Result<()> {
        let service = TranslationService::new(
            &self.config.translation,
            &self.config.source_language,
            &self.config.target_language,
        )?;
        // Non-fatal probe; an unreachable provider surfaces per document anyway
        if let Err(e) = service.test_connection().await {
            warn!("Provider connection check failed: {}", e);
        }
        self.run_with_translator(&service).await
    }

    /// Run the tree walk with an explicit chunk translator. Per-document
    /// failures are reported and never abort the walk.
    pub async fn run_with_translator<T: ChunkTranslator>(&self, translator: &T) -> Result<()> {
        if !FileManager::dir_exists(&self.config.source_dir) {
            return Err(anyhow::anyhow!(
                "Source directory does not exist: {:?}",
                self.config.source_dir
            ));
        }

        info!("Translation process started");
        FileManager::append_to_log_file(&self.config.log_file, "Translation process started")?;

        let state = RunState::load(&self.config.state_file)?;
        let documents =
            FileManager::find_documents(&self.config.source_dir, &self.config.extension)?;

        let progress = ProgressBar::new(documents.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        for source_path in &documents {
            let relative = FileManager::relative_path(source_path, &self.config.source_dir)?;
            progress.set_message(relative.display().to_string());

            if let Err(e) = self
                .process_document(source_path, &relative, translator, &state)
                .await
            {
                let line = format!("Failed to process {}: {:#}", relative.display(), e);
                error!("{}", line);
                // Reporting must not take down the walk either
                let _ = FileManager::append_to_log_file(&self.config.log_file, &line);
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        info!("----Translation of all files completed----");
        FileManager::append_to_log_file(
            &self.config.log_file,
            "----Translation of all files completed----",
        )?;
        Ok(())
    }

    /// Process one document: decide, translate or skip, persist run state,
    /// then compare structural fingerprints of source and target.
    async fn process_document<T: ChunkTranslator>(
        &self,
        source_path: &Path,
        relative: &Path,
        translator: &T,
        state: &RunState,
    ) -> Result<()> {
        let target_path = FileManager::target_path(
            source_path,
            &self.config.source_dir,
            &self.config.target_dir,
        )?;

        let content = FileManager::read_to_string(source_path)?;
        let source_fingerprint = fingerprint::fingerprint(&content);

        let target_exists = FileManager::file_exists(&target_path);
        // Change time is only needed once a target exists
        let last_modified = if target_exists {
            document_change_time(source_path)?
        } else {
            0
        };

        if needs_translation(target_exists, last_modified, state.last_run()) {
            let reason = if target_exists { "updated" } else { "new file" };
            let line = format!("Translating: {} ({})", relative.display(), reason);
            info!("{}", line);
            FileManager::append_to_log_file(&self.config.log_file, &line)?;

            if let Some(parent) = target_path.parent() {
                FileManager::ensure_dir(parent)?;
            }

            let chunk_size = self.config.translation.provider_config()?.chunk_size;
            let observer: Box<dyn ChunkObserver> = if self.config.dump_chunks {
                Box::new(DebugDumpObserver::new(&target_path, source_path)?)
            } else {
                Box::new(NoopObserver)
            };

            // A chunk failure propagates here before anything is written, so
            // the previous target content, if any, stays intact
            let translated = DocumentTranslator::new(translator, chunk_size)
                .translate_document(&content, observer.as_ref())
                .await?;
            FileManager::write_to_file(&target_path, &translated)?;
            info!("Translation completed. Output: {:?}", target_path);
        } else {
            let line = format!("Skipping: {} (no changes)", relative.display());
            info!("{}", line);
            FileManager::append_to_log_file(&self.config.log_file, &line)?;
        }

        // Advance the persisted run state only past documents that were
        // fully processed or legitimately skipped
        state.touch()?;

        let target_content = FileManager::read_to_string(&target_path)?;
        let target_fingerprint = fingerprint::fingerprint(&target_content);
        let mismatches = source_fingerprint.mismatches(&target_fingerprint);

        if mismatches.is_empty() {
            let line = format!("All elements match for {}", relative.display());
            info!("{}", line);
            FileManager::append_to_log_file(&self.config.log_file, &line)?;
        } else {
            for mismatch in &mismatches {
                let line = format!("{}: {}", relative.display(), mismatch);
                warn!("{}", line);
                FileManager::append_to_log_file(&self.config.log_file, &line)?;
            }
            let line = format!(
                "Some elements do not match for {}. Verification needed.",
                relative.display()
            );
            warn!("{}", line);
            FileManager::append_to_log_file(&self.config.log_file, &line)?;
        }

        Ok(())
    }
}
