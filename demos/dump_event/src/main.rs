//! dump_event: builds a few small simulated events, prints their track
//! tables and writes them to CSV.
//!
//! Each event holds one generator muon that decays in flight into
//! e- nu_e~ nu_mu; the electron radiates a bremsstrahlung photon and carries
//! on.  Every track still open afterwards is projected straight onto the
//! ECAL surface and its entrance recorded.
//!
//! Usage: `dump_event [navigation.json] [particles.csv]`
//!
//! Set `RUST_LOG=debug` to see every registration.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use fs_core::pdt::pid;
use fs_core::{LorentzVector, NavigationConfig, ParticleTable, RawParticle, ThreeVector, TrackId};
use fs_event::{EventBuilder, FBaseSimEvent, GenParticle, LayerStatus};
use fs_output::{CsvWriter, EventRecorder};

// ── Constants ─────────────────────────────────────────────────────────────────

const EVENT_COUNT: u64 = 3;
const SEED:        u64 = 42;
const OUTPUT_DIR:  &str = "output/dump_event";

/// ECAL front face: barrel radius and endcap |z|, in cm.
const ECAL_RADIUS: f64 = 129.0;
const ECAL_Z:      f64 = 320.0;

// ── Event generation ──────────────────────────────────────────────────────────

fn scaled(p: &ThreeVector, f: f64) -> ThreeVector {
    ThreeVector::new(p.x * f, p.y * f, p.z * f)
}

fn along(from: &LorentzVector, dir: &ThreeVector, dist: f64) -> LorentzVector {
    let u = scaled(dir, dist / dir.mag());
    LorentzVector::new(from.x + u.x, from.y + u.y, from.z + u.z, from.t + dist)
}

fn build_event(
    table:  &Arc<ParticleTable>,
    config: NavigationConfig,
    number: u64,
    rng:    &mut SmallRng,
) -> Result<FBaseSimEvent> {
    let mut ev = EventBuilder::new(Arc::clone(table))
        .config(config)
        .event_number(number)
        .build()?;

    let pv_pos = LorentzVector::new(0.0, 0.0, rng.gen_range(-5.0..5.0), 0.0);
    let pv = ev.add_sim_vertex(pv_pos, None)?;

    // Generator muon.
    let pt: f64 = rng.gen_range(5.0..50.0);
    let eta: f64 = rng.gen_range(-2.0..2.0);
    let phi: f64 = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
    let p = ThreeVector::new(pt * phi.cos(), pt * phi.sin(), pt * eta.sinh());
    let mu_mass = table.get(pid::MUON).map_or(0.105_658, |d| d.mass);
    let generated = GenParticle::new(pid::MUON, GenParticle::FINAL_STATE, LorentzVector::from_momentum_mass(p, mu_mass))
        .with_production(pv_pos);
    let mu = ev.add_gen_track(generated, pv)?;

    // Decay in flight.
    let decay_pos = along(&pv_pos, &p, rng.gen_range(20.0..100.0));
    let decay = ev.add_sim_vertex(decay_pos, Some(mu))?;
    let electron = ev.add_sim_track(&table.raw_particle(pid::ELECTRON, scaled(&p, 0.5), decay_pos)?, decay, None)?;
    ev.add_sim_track(&table.raw_particle(-pid::NU_E, scaled(&p, 0.3), decay_pos)?, decay, None)?;
    ev.add_sim_track(&table.raw_particle(pid::NU_MU, scaled(&p, 0.2), decay_pos)?, decay, None)?;

    // Soft bremsstrahlung: the electron keeps going.
    let brem_pos = along(&decay_pos, &p, rng.gen_range(2.0..10.0));
    let brem = ev.add_sim_vertex(brem_pos, Some(electron))?;
    ev.add_sim_track(&table.raw_particle(pid::PHOTON, scaled(&p, 0.05), brem_pos)?, brem, None)?;

    Ok(ev)
}

// ── Calorimeter entrance ──────────────────────────────────────────────────────

/// Straight-line projection of `particle`'s momentum from `origin` onto the
/// ECAL front face.
fn ecal_entrance(particle: &RawParticle, origin: &LorentzVector) -> (LayerStatus, LorentzVector) {
    let p = particle.momentum.vect();
    let to_barrel = if p.perp() > 0.0 { (ECAL_RADIUS - origin.perp()) / p.perp() } else { f64::INFINITY };
    let to_endcap = if p.z != 0.0 { (ECAL_Z.copysign(p.z) - origin.z) / p.z } else { f64::INFINITY };

    let (status, s) = if to_barrel <= to_endcap {
        (LayerStatus::Barrel, to_barrel)
    } else {
        (LayerStatus::Endcap, to_endcap)
    };
    let pos = LorentzVector::new(origin.x + s * p.x, origin.y + s * p.y, origin.z + s * p.z, origin.t);
    (status, pos)
}

fn propagate_to_ecal(ev: &mut FBaseSimEvent) -> Result<usize> {
    let mut open = Vec::new();
    for track in ev.track_views() {
        let interacts = pid::is_photon(track.pid()) || track.charge().is_some_and(|c| c != 0.0);
        if interacts && track.no_end_vertex()? {
            let id = track.id().context("registered track without id")?;
            open.push((id, *track.vertex()?.position()));
        }
    }

    for &(id, origin) in &open {
        let record = ev.track_mut(id)?;
        let particle = RawParticle::new(record.pid(), *record.momentum(), origin);
        let (status, pos) = ecal_entrance(&particle, &origin);
        record.set_ecal(&particle.moved_to(pos), status)?;
        record.set_propagate();
    }
    Ok(open.len())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str::<NavigationConfig>(&text).with_context(|| format!("parsing {path}"))?
        }
        None => NavigationConfig::default(),
    };
    let table = Arc::new(match args.next() {
        Some(path) => fs_core::load_particle_table_csv(Path::new(&path))?,
        None => ParticleTable::standard(),
    });
    tracing::info!(species = table.len(), ?config, "setup complete");

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut recorder = EventRecorder::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);
    let mut rng = SmallRng::seed_from_u64(SEED);

    for number in 0..EVENT_COUNT {
        let mut ev = build_event(&table, config, number, &mut rng)?;
        let projected = propagate_to_ecal(&mut ev)?;
        tracing::info!(event = number, projected, "propagated open tracks");

        println!("{ev}");

        let muon = ev.track(TrackId(0))?;
        let probe = LorentzVector::new(10.0, 0.0, 0.0, 0.0);
        println!(
            "muon: {} daughters, end vertex beyond r = 10 cm: {}",
            muon.n_daughters()?,
            muon.not_yet_to_end_vertex(&probe)?,
        );
        let electron = muon.daughter(0)?;
        println!(
            "electron: {} daughters, still open: {}",
            electron.n_daughters()?,
            electron.no_end_vertex()?,
        );
        println!();

        recorder.record(&ev)?;
    }

    recorder.finish()?;
    println!("Wrote {} events ({} tracks) to {OUTPUT_DIR}", recorder.events_recorded(), recorder.tracks_written());
    Ok(())
}
