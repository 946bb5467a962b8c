use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::capabilities::{InferenceClient, Summarize, Translate};
use crate::document::PdfDocument;
use crate::file_utils::{FileManager, TempUpload};
use crate::language_utils;
use crate::pipeline::{ChunkDispatcher, SummaryAdapter, TranslationAdapter, chunk_page_text};

// @module: Application controller for PDF digestion

/// Main application controller for PDF summarization and translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Parallel dispatcher over the injected capabilities
    dispatcher: ChunkDispatcher,
    // @field: Inference client, kept for the pre-flight health check
    inference: Option<Arc<InferenceClient>>,
}

impl Controller {
    // @method: Create a controller with explicitly injected capabilities
    pub fn new(
        config: Config,
        summarizer: Arc<dyn Summarize>,
        translator: Arc<dyn Translate>,
    ) -> Self {
        let summary_adapter = SummaryAdapter::new(summarizer, &config.summary);
        let translation_adapter = TranslationAdapter::new(
            translator,
            config.chunking.max_chunk_length,
            config.generation.clone(),
        );
        let dispatcher = ChunkDispatcher::new(
            summary_adapter,
            translation_adapter,
            config.effective_workers(),
        );

        Self { config, dispatcher, inference: None }
    }

    /// Create a controller backed by the configured inference service
    pub fn with_config(config: Config) -> Self {
        let client = Arc::new(InferenceClient::new(&config.inference));
        let mut controller = Self::new(config.clone(), client.clone(), client.clone());
        controller.inference = Some(client);
        controller
    }

    /// Resolve the configured target language to a model code
    pub fn target_language_code(&self) -> Result<&'static str> {
        language_utils::resolve_language(&self.config.target_language)
    }

    /// Digest an uploaded PDF: extract, chunk, summarize, translate.
    ///
    /// The upload lives in a scoped temporary file that is removed on every
    /// exit path, including early failures. Returns one translated summary
    /// block per chunk, in original chunk order; an empty or text-free
    /// document yields an empty list, not an error.
    pub async fn digest_bytes(&self, bytes: &[u8], target_lang: &str) -> Result<Vec<String>> {
        self.digest_bytes_with_progress(bytes, target_lang, |_, _| {}).await
    }

    /// Digest with a progress callback receiving (completed, total) chunks
    pub async fn digest_bytes_with_progress(
        &self,
        bytes: &[u8],
        target_lang: &str,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Result<Vec<String>> {
        if !FileManager::is_pdf_bytes(bytes) {
            return Err(anyhow!("Upload does not look like a PDF document"));
        }

        // The guard deletes the file when this function returns, on both the
        // success and the failure path
        let upload = TempUpload::from_bytes(bytes)
            .context("Failed to persist upload")?;

        let chunks = self.collect_chunks(upload.path())?;
        if chunks.is_empty() {
            info!("Document contains no extractable text");
            return Ok(Vec::new());
        }

        debug!("Dispatching {} chunk(s) to {} worker(s)",
            chunks.len(), self.config.effective_workers());

        let translated = self.dispatcher
            .dispatch(&chunks, target_lang, progress_callback)
            .await?;

        Ok(translated)
    }

    /// Digest a PDF file from disk
    pub async fn digest_file<P: AsRef<Path>>(&self, path: P, target_lang: &str) -> Result<Vec<String>> {
        let bytes = FileManager::read_bytes(path)?;
        self.digest_bytes(&bytes, target_lang).await
    }

    /// Extract per-page text and produce the flat, ordered chunk list.
    ///
    /// Page boundaries are not preserved: chunks from all pages are flattened
    /// into one sequence before dispatch.
    fn collect_chunks(&self, path: &Path) -> Result<Vec<String>> {
        let doc = PdfDocument::open(path)
            .context("File not found or unreadable. Please make sure the file path is correct.")?;

        let max_chunk_length = self.config.chunking.max_chunk_length;
        let mut chunks = Vec::new();

        for page_text in doc.extract_all_pages()? {
            chunks.extend(chunk_page_text(&page_text, max_chunk_length));
        }

        debug!("Extracted {} chunk(s) from {} page(s)", chunks.len(), doc.page_count());
        Ok(chunks)
    }

    /// Run the main workflow for a single PDF file
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_dir: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let target_code = self.target_language_code()?;
        let target_label = language_utils::label_for_code(target_code).unwrap_or(target_code);

        // Check if a translated summary already exists
        let output_path = output_dir.as_ref().map(|dir| {
            FileManager::generate_output_path(&input_file, dir, target_code)
        });
        if let Some(path) = &output_path {
            if path.exists() && !force_overwrite {
                warn!("Skipping file, output already exists (use -f to force overwrite)");
                return Ok(());
            }
        }

        info!("Summarizing and translating {:?} into {}", input_file, target_label);

        // Pre-flight health check; a failure is logged but does not abort
        if let Some(client) = &self.inference {
            if let Err(e) = client.test_connection().await {
                warn!("Inference service health check failed: {}", e);
            }
        }

        let bytes = FileManager::read_bytes(&input_file)?;

        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} chunks")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        let progress_clone = progress.clone();

        let blocks = self.digest_bytes_with_progress(&bytes, target_code, move |current, total| {
            progress_clone.set_length(total as u64);
            progress_clone.set_position(current as u64);
        }).await?;

        progress.finish_and_clear();

        match &output_path {
            Some(path) => {
                FileManager::write_to_file(path, &blocks.join("\n\n"))?;
                info!("Wrote {} translated block(s) to {:?}", blocks.len(), path);
            }
            None => {
                if blocks.is_empty() {
                    info!("No text to summarize in {:?}", input_file);
                } else {
                    for block in &blocks {
                        println!("{}\n", block);
                    }
                }
            }
        }

        info!("Completed in {:.1}s", start_time.elapsed().as_secs_f64());
        Ok(())
    }

    /// Run the workflow for every PDF under a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        info!("Processing PDF files under {:?}", input_dir);

        let files = FileManager::find_pdf_files(&input_dir)?;
        if files.is_empty() {
            warn!("No PDF files found under {:?}", input_dir);
            return Ok(());
        }

        let mut processed_count = 0;
        for file in files {
            let output_dir = file.parent().unwrap_or(Path::new(".")).to_path_buf();
            match self.run(file.clone(), Some(output_dir), force_overwrite).await {
                Ok(()) => processed_count += 1,
                Err(e) => log::error!("Error processing {:?}: {}", file, e),
            }
        }

        info!("Finished processing {} file(s)", processed_count);
        Ok(())
    }
}
