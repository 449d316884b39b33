use crate::prelude::{eprintln, println, *};
use pokeretriever_core::modes::{Endpoints, SearchMode};
use std::path::PathBuf;

use crate::orchestrator::{read_identifiers, run_batch};
use crate::request::{BatchSource, Request};
use crate::sink::Sink;

#[derive(Debug, clap::Args, Clone)]
#[group(required = true, multiple = false)]
pub struct InputSource {
    /// Text file with one name or id per line
    #[arg(long = "inputfile", value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Single name or id to look up
    #[arg(long = "inputdata", value_name = "VALUE")]
    pub input_data: Option<String>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct RetrieveOptions {
    #[clap(flatten)]
    pub source: InputSource,

    /// Resolve the stats, abilities and moves of a pokemon into full records
    #[arg(long)]
    pub expanded: bool,

    /// Append results to this file instead of printing them
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RetrieveOptions {
    pub fn into_request(self, mode: SearchMode) -> Result<Request> {
        let InputSource {
            input_file,
            input_data,
        } = self.source;
        let source = input_data
            .map(BatchSource::Single)
            .or(input_file.map(BatchSource::File))
            .ok_or_eyre("Either --inputfile or --inputdata is required")?;

        Ok(Request {
            mode,
            source,
            expanded: self.expanded,
            output: self.output,
            json: self.json,
        })
    }
}

pub async fn run(request: Request, global: crate::Global) -> Result<()> {
    let endpoints = Endpoints::new(&global.api_base);

    if global.verbose {
        eprintln!("PokeAPI base: {}", global.api_base);
        eprintln!();
    }

    let identifiers = read_identifiers(&request.source)?;

    if global.verbose {
        eprintln!(
            "Fetching {} {} record(s){}...",
            identifiers.len(),
            request.mode,
            if request.expanded {
                " with nested references expanded"
            } else {
                ""
            }
        );
    }

    let client = reqwest::Client::new();
    let outcomes = run_batch(&client, &endpoints, &request, &identifiers).await;

    let sink = Sink::for_request(&request);
    sink.write_all(&outcomes)?;

    if let Sink::File { path, .. } = &sink {
        println!("Wrote {} records to {}", outcomes.len(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;
    use wiremock::MockServer;

    fn create_test_global(api_base: String) -> crate::Global {
        crate::Global {
            api_base,
            verbose: false,
        }
    }

    #[test]
    fn test_into_request_single() {
        let options = RetrieveOptions {
            source: InputSource {
                input_file: None,
                input_data: Some("25".to_string()),
            },
            expanded: true,
            output: None,
            json: false,
        };

        let request = options.into_request(SearchMode::Pokemon).unwrap();

        assert_eq!(request.source, BatchSource::Single("25".to_string()));
        assert!(request.expanded);
        assert_eq!(request.mode, SearchMode::Pokemon);
    }

    #[test]
    fn test_into_request_file() {
        let options = RetrieveOptions {
            source: InputSource {
                input_file: Some(PathBuf::from("moves.txt")),
                input_data: None,
            },
            expanded: false,
            output: Some(PathBuf::from("out.txt")),
            json: false,
        };

        let request = options.into_request(SearchMode::Move).unwrap();

        assert_eq!(request.source, BatchSource::File(PathBuf::from("moves.txt")));
        assert_eq!(request.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_into_request_without_source() {
        let options = RetrieveOptions {
            source: InputSource {
                input_file: None,
                input_data: None,
            },
            expanded: false,
            output: None,
            json: false,
        };

        assert!(options.into_request(SearchMode::Ability).is_err());
    }

    #[tokio::test]
    async fn test_run_unknown_pokemon_to_file() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let mut request = create_test_request(SearchMode::Pokemon, false);
        request.source = BatchSource::Single("doesnotexist".to_string());
        request.output = Some(output.clone());

        run(request, create_test_global(server.uri())).await.unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Timestamp: "));
        assert!(content.contains("Number of requests: 1\n\n"));
        assert!(content.ends_with("An error has occurred. Skipping this request\n\n"));
        assert_eq!(received_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_run_pokemon_to_file() {
        let server = MockServer::start().await;
        mount_pikachu(&server).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let mut request = create_test_request(SearchMode::Pokemon, true);
        request.output = Some(output.clone());

        run(request, create_test_global(server.uri())).await.unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Pokemon: pikachu"));
        assert!(content.contains("\"is_battle_only\": false"));
        assert!(content.contains("\"short_effect\": \"static short\""));
    }

    #[tokio::test]
    async fn test_run_verbose_keeps_output_file_clean() {
        let server = MockServer::start().await;
        mount_json(&server, "/ability/static", ability_json(9, "static")).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let mut request = create_test_request(SearchMode::Ability, false);
        request.source = BatchSource::Single("static".to_string());
        request.output = Some(output.clone());
        let mut global = create_test_global(server.uri());
        global.verbose = true;

        run(request, global).await.unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains("PokeAPI base"));
        assert!(!content.contains("Fetching"));
        assert!(content.contains("Name: static"));
    }

    #[tokio::test]
    async fn test_run_missing_input_file() {
        let server = MockServer::start().await;
        let mut request = create_test_request(SearchMode::Ability, false);
        request.source = BatchSource::File(PathBuf::from("/nonexistent/abilities.txt"));

        let result = run(request, create_test_global(server.uri())).await;

        assert!(result.is_err());
        assert_eq!(received_count(&server).await, 0);
    }
}
