use accel_core::constants::ELECTRON_REST_ENERGY;
use accel_core::conversions::JOULE_TO_GEV;
use accel_optics::BeamRigidity;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Electron rest energy: {:.6} MeV\n",
        ELECTRON_REST_ENERGY * JOULE_TO_GEV * 1e3
    );

    // Linac exit, booster injection, booster extraction / storage ring, upgrade study
    let energies = [0.15, 0.5, 3.0, 6.0];

    println!(
        "{:>8}  {:>12}  {:>12}  {:>10}  {:>14}",
        "E [GeV]", "Bρ [T·m]", "1-β", "γ", "v [m/s]"
    );
    for energy in energies {
        let beam = BeamRigidity::from_energy(energy)?;
        println!(
            "{:>8.3}  {:>12.6}  {:>12.4e}  {:>10.1}  {:>14.3}",
            beam.energy,
            beam.rigidity,
            1.0 - beam.beta,
            beam.gamma,
            beam.velocity
        );
    }

    Ok(())
}
