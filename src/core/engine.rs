use crate::core::handler::Handler;
use crate::domain::model::{AdapterRequest, HandleMode, RunSummary};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{AdapterError, Result};

pub struct AdapterEngine<H: Handler, S: Storage> {
    handler: H,
    storage: S,
}

impl<H: Handler, S: Storage> AdapterEngine<H, S> {
    pub fn new(handler: H, storage: S) -> Self {
        Self { handler, storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 把文字依模式切成請求並交給 handler，回傳輸出與請求數
    pub fn process(&self, text: String, mode: HandleMode) -> (String, usize) {
        match mode {
            HandleMode::Whole => {
                let response = self.handler.handle_request(AdapterRequest::from(text));
                (response.body, 1)
            }
            HandleMode::Lines => {
                let mut output = String::with_capacity(text.len());
                let mut requests = 0;
                // 保留換行符，輸出才能逐位元組還原
                for line in text.split_inclusive('\n') {
                    let response = self
                        .handler
                        .handle_request(AdapterRequest::from(line.to_string()));
                    output.push_str(&response.body);
                    requests += 1;
                }
                (output, requests)
            }
        }
    }

    pub async fn run<C: ConfigProvider>(&self, config: &C) -> Result<RunSummary> {
        let input_path = config.input_path();
        let output_path = config.output_path();
        let mode = config.mode();

        tracing::info!(input = input_path, output = output_path, %mode, "Starting adapter run");

        let raw = self.storage.read_file(input_path).await?;
        let bytes_in = raw.len();
        tracing::debug!("Read {} bytes from {}", bytes_in, input_path);

        let text = String::from_utf8(raw).map_err(|e| AdapterError::ProcessingError {
            message: format!(
                "input '{}' is not valid UTF-8 (at byte {})",
                input_path,
                e.utf8_error().valid_up_to()
            ),
        })?;

        let (output, requests) = self.process(text, mode);
        let bytes_out = output.len();

        self.storage.write_file(output_path, output.as_bytes()).await?;

        tracing::info!(requests, bytes_in, bytes_out, "Adapter run completed");

        Ok(RunSummary {
            requests,
            bytes_in,
            bytes_out,
            output_path: output_path.to_string(),
        })
    }
}
