use crate::config::Config;
use crate::file_source::interface::SelectedFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::{Prediction, PredictionClient};
use crate::prediction_client::response::interpret_response;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::sync::Arc;

/// Uploads the image as multipart form data to the prediction endpoint.
pub struct PredictionClientHttp {
    http: Client,
    url: String,
    field_name: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let http = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            http,
            url: config.predict_url(),
            field_name: config.upload_field_name.clone(),
            logger: logger.with_namespace("prediction_client").with_namespace("http"),
        })
    }

    fn form(&self, file: &SelectedFile) -> Result<Form, PredictError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(PredictError::from)?;

        Ok(Form::new().part(self.field_name.clone(), part))
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, file: &SelectedFile) -> Result<Prediction, PredictError> {
        let _ = self
            .logger
            .info(&format!("POST {} {:?}", self.url, file));

        let response = match self.http.post(&self.url).multipart(self.form(file)?).send() {
            Ok(response) => response,
            Err(e) => {
                let _ = self.logger.warn(&format!("Request failed: {}", e));
                return Err(PredictError::from(e));
            }
        };

        let status = response.status().as_u16();
        // A body that cannot be read is treated like an empty one; the status
        // still decides the message.
        let body = match response.bytes() {
            Ok(body) => body.to_vec(),
            Err(e) => {
                let _ = self
                    .logger
                    .warn(&format!("Could not read response body: {}", e));
                Vec::new()
            }
        };

        let result = interpret_response(status, &body);

        let _ = self.logger.info(&format!("{} -> {:?}", status, result));

        result
    }
}
