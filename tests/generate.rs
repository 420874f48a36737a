use resume_gen::{generate, EducationEntry, Error, ResumeRecord, Skill};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn jane_doe() -> ResumeRecord {
    ResumeRecord {
        name: "Jane Doe".into(),
        title: "Engineer".into(),
        about: "Loves systems".into(),
        phone: "555-1234".into(),
        email: "jane@x.com".into(),
        address: "1 Main St".into(),
        education: vec![EducationEntry {
            years: "2018-2020".into(),
            school: "State U".into(),
            location: "City".into(),
        }],
        experience: vec![],
        skills: vec![Skill {
            name: "Go".into(),
            level: 80,
        }],
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn generates_a_pdf_document() {
    init_logging();
    let pdf = generate(&jane_doe(), None).expect("generation succeeds");

    assert!(pdf.starts_with(b"%PDF-"), "output is a PDF document");
    // the content stream is uncompressed, so laid-out text is visible
    assert!(contains(&pdf, b"(Jane Doe) Tj"));
    assert!(contains(&pdf, b"(State U) Tj"));
    assert!(contains(&pdf, b"(Expertise) Tj"));
    assert!(contains(&pdf, b"/Helvetica-Bold"));
    // no photo supplied, so no image resource is registered
    assert!(!contains(&pdf, b"/I0"));
}

#[test]
fn generation_is_deterministic() {
    init_logging();
    let a = generate(&jane_doe(), None).expect("generation succeeds");
    let b = generate(&jane_doe(), None).expect("generation succeeds");
    assert_eq!(a, b, "identical input must produce identical bytes");
}

#[test]
fn embeds_an_uploaded_photo() {
    init_logging();
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        120,
        90,
        image::Rgba([64, 96, 128, 255]),
    ));
    let mut png = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageOutputFormat::Png,
    )
    .expect("png encodes");

    let pdf = generate(&jane_doe(), Some(&png)).expect("generation succeeds");
    assert!(contains(&pdf, b"/I0"), "photo XObject is placed");
    assert!(
        contains(&pdf, b"/SMask"),
        "circular mask embeds an alpha soft mask"
    );
}

#[test]
fn corrupt_photo_still_produces_a_document() {
    init_logging();
    let pdf = generate(&jane_doe(), Some(b"\x00\x01garbage")).expect("photo failure is recovered");
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(!contains(&pdf, b"/I0"), "placeholder path has no image");
}

#[test]
fn missing_required_field_aborts_with_no_output() {
    init_logging();
    let record = ResumeRecord {
        title: "Engineer".into(),
        ..Default::default()
    };
    assert!(matches!(
        generate(&record, None),
        Err(Error::MissingField("name"))
    ));
}
