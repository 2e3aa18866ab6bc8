//! End-to-end quotation flow over the public API.
//!
//! Configures furniture through the step workflow, aggregates a
//! quotation, and persists it through the in-memory store.

use std::sync::Arc;

use quotecraft::adapters::memory::{FixedIdentity, InMemoryProjectStore};
use quotecraft::adapters::pricing::SurfaceAreaPricing;
use quotecraft::application::QuotationSession;
use quotecraft::config::PricingConfig;
use quotecraft::domain::catalog::Catalog;
use quotecraft::domain::foundation::{FurnitureType, Money, TaxRate, User, UserRole};
use quotecraft::domain::project::{Client, NewProject, ProjectStatus};
use quotecraft::domain::selection::{DimensionField, MaterialField};
use quotecraft::domain::workflow::ConfigStep;
use quotecraft::ports::ProjectStore;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::standard().clone())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quotecraft=debug")),
        )
        .with_test_writer()
        .try_init();
}

async fn new_session(store: Arc<InMemoryProjectStore>) -> QuotationSession {
    init_tracing();
    let project = store
        .create_project(NewProject {
            title: "Mehta Residence".to_string(),
            description: "Bedroom and study".to_string(),
            client: Client {
                id: None,
                name: "R. Mehta".to_string(),
                email: "mehta@example.com".to_string(),
                phone: "98200 00000".to_string(),
                address: "12 Hill Road, Bandra".to_string(),
            },
        })
        .await
        .expect("create project");

    QuotationSession::new(
        project.id,
        FurnitureType::Wardrobe,
        catalog(),
        TaxRate::default(),
        Arc::new(SurfaceAreaPricing::new(catalog(), &PricingConfig::default())),
        store,
        Arc::new(FixedIdentity::new(User::new(
            "Asha Iyer",
            "asha@example.com",
            UserRole::Employee,
        ))),
    )
}

/// 10ft × 8ft × 2ft wardrobe, MDF with outer PVC, 4 hinges + 2 handles.
///
/// Surface area 232 sqft; material 232 × (120 + 45) = ₹38,280;
/// hardware 4 × 150 + 2 × 200 = ₹1,000; labor 232 × 85 × 1.2 = ₹23,664.
fn configure_wardrobe(session: &mut QuotationSession) {
    let wf = session.workflow_mut();
    wf.set_dimension_field(DimensionField::Width, "10").unwrap();
    wf.set_dimension_field(DimensionField::Height, "8").unwrap();
    wf.set_dimension_field(DimensionField::Depth, "2").unwrap();
    assert!(wf.advance());
    wf.set_component("doors", 2).unwrap();
    assert!(wf.advance());
    wf.set_material(MaterialField::Primary, "mdf").unwrap();
    wf.set_material(MaterialField::OuterLamination, "pvc").unwrap();
    assert!(wf.advance());
    wf.set_hardware("hinges", 4).unwrap();
    wf.set_hardware("handles", 2).unwrap();
}

/// 4ft × 2.5ft × 2ft plywood study table, 2 drawer slides + 2 handles.
///
/// Surface area 46 sqft; material 46 × 180 = ₹8,280; hardware
/// 2 × 250 + 2 × 180 = ₹860; labor 46 × 85 × 0.9 = ₹3,519.
fn configure_study_table(session: &mut QuotationSession) {
    let wf = session.workflow_mut();
    wf.set_furniture_type(FurnitureType::StudyTable).unwrap();
    wf.set_dimension_field(DimensionField::Width, "4").unwrap();
    wf.set_dimension_field(DimensionField::Height, "2.5").unwrap();
    wf.set_dimension_field(DimensionField::Depth, "2").unwrap();
    assert!(wf.advance());
    wf.set_component("drawers", 2).unwrap();
    assert!(wf.advance());
    wf.set_material(MaterialField::Primary, "plywood").unwrap();
    assert!(wf.advance());
    wf.set_hardware("drawer_slides", 2).unwrap();
    wf.set_hardware("handles", 2).unwrap();
}

#[tokio::test]
async fn full_quotation_flow_prices_saves_and_renders() {
    let store = Arc::new(InMemoryProjectStore::new());
    let mut session = new_session(store.clone()).await;

    configure_wardrobe(&mut session);
    session.add_current_item().await.expect("wardrobe priced");

    // The workflow resets for the next item; the type is reconsidered
    // in step one.
    assert_eq!(
        session.workflow().current_step(),
        Some(ConfigStep::Dimensions)
    );
    configure_study_table(&mut session);
    session.add_current_item().await.expect("study table priced");

    assert_eq!(session.items().len(), 2);
    assert_eq!(
        session.items()[0].costs.total(),
        Money::from_rupees(62_944)
    );
    assert_eq!(
        session.items()[1].costs.total(),
        Money::from_rupees(12_659)
    );
    assert_eq!(session.subtotal(), Money::from_rupees(75_603));
    assert_eq!(session.tax(), Money::from_rupees(13_609));
    assert_eq!(session.grand_total(), Money::from_rupees(89_212));

    session.save().await.expect("save quotation");
    let project = store
        .find_project(&session.project_id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.total_amount, Money::from_rupees(75_603));

    let bytes = session.render_pdf().await.expect("render");
    let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(document["items"].as_array().unwrap().len(), 2);
    assert_eq!(document["project"]["title"], "Mehta Residence");
}

#[tokio::test]
async fn removing_an_item_reprices_the_quotation() {
    let store = Arc::new(InMemoryProjectStore::new());
    let mut session = new_session(store.clone()).await;

    configure_wardrobe(&mut session);
    session.add_current_item().await.unwrap();
    configure_study_table(&mut session);
    session.add_current_item().await.unwrap();

    let removed = session.remove_item(0).expect("remove wardrobe");
    assert_eq!(removed.furniture_type, FurnitureType::Wardrobe);

    assert_eq!(session.subtotal(), Money::from_rupees(12_659));
    assert_eq!(session.tax(), Money::from_rupees(2_279));
    assert_eq!(session.grand_total(), Money::from_rupees(14_938));

    session.save().await.unwrap();
    let project = store
        .find_project(&session.project_id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(project.total_amount, Money::from_rupees(12_659));
}

#[tokio::test]
async fn quotation_snapshot_carries_validity_and_ids() {
    let store = Arc::new(InMemoryProjectStore::new());
    let mut session = new_session(store).await;

    configure_wardrobe(&mut session);
    session.add_current_item().await.unwrap();

    let quotation = session.quotation();
    assert_eq!(quotation.project_id, session.project_id());
    assert_eq!(quotation.subtotal, Money::from_rupees(62_944));
    assert_eq!(quotation.grand_total, quotation.subtotal + quotation.tax);
    assert!(quotation.valid_until.is_after(&quotation.generated_at));
    assert!(quotation.items[0].id.is_some());
}

#[tokio::test]
async fn signed_in_user_is_available_for_the_document() {
    let store = Arc::new(InMemoryProjectStore::new());
    let session = new_session(store).await;
    let user = session.prepared_by().await.unwrap();
    assert_eq!(user.name, "Asha Iyer");
    assert_eq!(user.role, UserRole::Employee);
}
