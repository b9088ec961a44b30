use std::fs;
use std::path::Path;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use veritext::config::{OcrConfig, ValidationConfig};
use veritext::ocr::OcrProvider;
use veritext::pipeline::{process_file, process_folder};
use veritext::validate::ValidationClient;

fn ocr_config() -> OcrConfig {
    OcrConfig {
        languages: "eng".to_string(),
        timeout_secs: 60,
        max_image_dimension: 4096,
        min_image_dimension: 50,
        pdf_render_dpi: 200,
    }
}

async fn validation_setup() -> (MockServer, ValidationClient) {
    let server = MockServer::start().await;
    let client = ValidationClient::new(&ValidationConfig {
        endpoint_url: format!("{}/api/validate", server.uri()),
        timeout_secs: 5,
    })
    .expect("Failed to build validation client");
    (server, client)
}

fn blank_png(path: &Path, width: u32, height: u32) {
    use image::{DynamicImage, ImageFormat};
    let img = DynamicImage::new_rgb8(width, height);
    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .unwrap();
    fs::write(path, output).unwrap();
}

#[tokio::test]
async fn test_unsupported_file_never_reaches_the_endpoint() {
    let (server, client) = validation_setup().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("notes.txt");
    fs::write(&txt, "plain text, not an image").unwrap();

    let ocr = OcrProvider::new(&ocr_config()).unwrap();
    process_file(&txt, &ocr, &ocr_config(), &client).await;
}

#[tokio::test]
async fn test_processing_the_same_file_twice_still_issues_no_requests() {
    let (server, client) = validation_setup().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let gif = dir.path().join("photo.gif");
    fs::write(&gif, b"GIF89a not really").unwrap();

    let ocr = OcrProvider::new(&ocr_config()).unwrap();
    process_file(&gif, &ocr, &ocr_config(), &client).await;
    process_file(&gif, &ocr, &ocr_config(), &client).await;
}

#[tokio::test]
async fn test_failed_image_extraction_never_reaches_the_endpoint() {
    let (server, client) = validation_setup().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    // A .png extension with undecodable contents: extraction fails, which is
    // collapsed to the no-text outcome, so no validation call is made.
    let bad = dir.path().join("broken.png");
    fs::write(&bad, [0u8, 1, 2, 3, 4, 5]).unwrap();

    let ocr = OcrProvider::new(&ocr_config()).unwrap();
    process_file(&bad, &ocr, &ocr_config(), &client).await;
}

#[tokio::test]
async fn test_blank_image_yields_no_validation_call() {
    let (server, client) = validation_setup().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let blank = dir.path().join("blank.png");
    blank_png(&blank, 100, 100);

    // With a working engine a solid blank image OCRs to empty text; without
    // one the extraction errors out. Both collapse to "no text extracted" and
    // neither may trigger a request.
    let ocr = OcrProvider::new(&ocr_config()).unwrap();
    process_file(&blank, &ocr, &ocr_config(), &client).await;
}

#[tokio::test]
async fn test_folder_traversal_skips_every_unsupported_file() {
    let (server, client) = validation_setup().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.txt"), "skip me").unwrap();
    fs::write(dir.path().join("anim.gif"), b"GIF89a").unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("deep.docx"), b"also skipped").unwrap();

    let ocr = OcrProvider::new(&ocr_config()).unwrap();
    process_folder(dir.path(), &ocr, &ocr_config(), &client).await;
}

#[tokio::test]
async fn test_traversal_continues_past_failing_files() {
    let (server, client) = validation_setup().await;
    Mock::given(method("POST"))
        .and(path("/api/validate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    // Two broken images and one unsupported file; each failure is contained
    // and the walk reaches all three.
    fs::write(dir.path().join("a_broken.png"), [1u8, 2, 3]).unwrap();
    fs::write(dir.path().join("b_broken.jpg"), [4u8, 5, 6]).unwrap();
    fs::write(dir.path().join("c_notes.txt"), "plain").unwrap();

    let ocr = OcrProvider::new(&ocr_config()).unwrap();
    process_folder(dir.path(), &ocr, &ocr_config(), &client).await;
}
