use brandpilot::audit::import::{ProfileImportError, ProfileImporter};
use brandpilot::ScoreBand;

#[test]
fn importer_scores_each_profile_in_export_order() {
    let csv = "Captured At,Handle,Display Name,Profile Photo,Bio Link,Highlights,Content Pillars,Feed Score,Internal Notes\n\
2025-10-01T08:30:00Z,@studio.mona,Studio Mona · Déco,mona.jpg,https://mona.studio,5,\"déco, DIY, coulisses\",12,vip\n\
2025-10-01,lea.coach,Léa,,,,,,\n";

    let profiles = ProfileImporter::from_reader(csv.as_bytes()).expect("import succeeds");
    assert_eq!(profiles.len(), 2);

    let mona = &profiles[0];
    assert_eq!(mona.handle, "studio.mona");
    assert!(mona.captured_at.is_some());
    let report = mona.report();
    // photo 10 + name 10 + highlights 15 + feed 12 + link 5 + pillars 10
    assert_eq!(report.score, 62);
    assert_eq!(report.label.band, ScoreBand::NeedsWork);

    let lea = &profiles[1];
    assert_eq!(lea.report().score, 5);
    assert_eq!(lea.report().label.band, ScoreBand::Priority);
}

#[test]
fn malformed_csv_is_reported() {
    let csv = "Handle,Display Name\nlea,Léa,unexpected\n";
    let result = ProfileImporter::from_reader(csv.as_bytes());
    assert!(matches!(result, Err(ProfileImportError::Csv(_))));
}
