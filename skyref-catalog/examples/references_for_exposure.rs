use skyref_catalog::{DataId, DbReferenceProvider, ExposureId, RefConfig, ReferenceProvider};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let db_name = args
        .next()
        .expect("Usage: references_for_exposure <db-name> <ccdExposureId>");
    let exposure_id: i64 = args
        .next()
        .expect("Usage: references_for_exposure <db-name> <ccdExposureId>")
        .parse()?;

    let config = RefConfig::new(db_name)?;
    let mut provider = DbReferenceProvider::mysql(&config);

    let data_ref = DataId::for_exposure(ExposureId(exposure_id));
    let references = provider.get_references(&data_ref, &())?;

    println!(
        "{} reference sources for exposure {} in {}:\n",
        references.len(),
        exposure_id,
        config.full_url()
    );
    for record in references.iter().take(20) {
        println!("  {:>20}  {}", record.id(), record.coord());
    }

    Ok(())
}
