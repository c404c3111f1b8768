#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = resimix_offer::run().await {
        log::error!("Errore durante la generazione dell'offerta: {:#}", e);
        std::process::exit(1);
    }
}
