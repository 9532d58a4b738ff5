use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tonic::{Request, Response, Status};

use quantum_cell::proto::quantum_cell_server::{QuantumCell, QuantumCellServer};
use quantum_cell::proto::{MeasureRequest, MeasureResponse, RenderRequest, RenderResponse};

// 核心模組
mod quantum;
mod render;
mod service;

use quantum::{QuantumError, DEFAULT_LABEL};
use render::{Canvas, RenderConfig, Renderer};
use service::{formula_image, measure, state_image};

// ============================================================================
// gRPC 服務
// ============================================================================

struct CellService {
    // 隨機源是唯一的共享資源；除非明確配置測試種子，
    // 否則由系統熵初始化，不跨請求洩漏固定種子
    rng: Mutex<StdRng>,
    renderer: Renderer,
}

impl CellService {
    fn new(rng: StdRng, config: RenderConfig) -> Self {
        Self {
            rng: Mutex::new(rng),
            renderer: Renderer::new(config),
        }
    }
}

fn canvas_response(canvas: Canvas, placeholder: bool) -> RenderResponse {
    RenderResponse {
        width: canvas.width,
        height: canvas.height,
        rgba: canvas.into_rgba(),
        placeholder,
    }
}

#[tonic::async_trait]
impl QuantumCell for CellService {
    async fn measure(
        &self,
        request: Request<MeasureRequest>,
    ) -> Result<Response<MeasureResponse>, Status> {
        let MeasureRequest {
            qubit_name,
            power,
            cell_index,
        } = request.into_inner();

        let label = if qubit_name.is_empty() {
            DEFAULT_LABEL.to_string()
        } else {
            qubit_name
        };

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| Status::internal("lock error"))?;

        let out = measure(power, cell_index, &mut *rng).map_err(|e| match e {
            QuantumError::InvalidParameter(_) => Status::invalid_argument(e.to_string()),
            _ => Status::internal(e.to_string()),
        })?;

        log::debug!("qubit {} collapsed to {}", label, out.outcome.as_str());

        Ok(Response::new(MeasureResponse {
            result: out.outcome.as_str().to_string(),
            cell_index: out.cell_index,
        }))
    }

    async fn render_state(
        &self,
        request: Request<RenderRequest>,
    ) -> Result<Response<RenderResponse>, Status> {
        let tag = request.into_inner().tag;

        let canvas = state_image(&self.renderer, &tag).map_err(|e| match e {
            QuantumError::UnknownTag(_) => Status::not_found(e.to_string()),
            _ => Status::internal(e.to_string()),
        })?;

        Ok(Response::new(canvas_response(canvas, false)))
    }

    async fn render_formula(
        &self,
        request: Request<RenderRequest>,
    ) -> Result<Response<RenderResponse>, Status> {
        let tag = request.into_inner().tag;

        // 未知公式不中斷：降級為佔位圖
        let (canvas, placeholder) = formula_image(&self.renderer, &tag);

        Ok(Response::new(canvas_response(canvas, placeholder)))
    }
}

// ============================================================================
// 啟動配置
// ============================================================================

/// 測試用固定種子：QUANTUM_CELL_SEED 設定時啟用
fn rng_from_env() -> StdRng {
    match std::env::var("QUANTUM_CELL_SEED") {
        Ok(seed) => match seed.parse::<u64>() {
            Ok(seed) => {
                log::warn!("fixed RNG seed {} configured; use for testing only", seed);
                StdRng::seed_from_u64(seed)
            }
            Err(_) => {
                log::warn!("ignoring unparsable QUANTUM_CELL_SEED {:?}", seed);
                StdRng::from_entropy()
            }
        },
        Err(_) => StdRng::from_entropy(),
    }
}

/// 呈現配置：QUANTUM_CELL_RENDER_CONFIG 指定 JSON 檔，否則用預設值
fn render_config_from_env() -> RenderConfig {
    match std::env::var("QUANTUM_CELL_RENDER_CONFIG") {
        Ok(path) => match RenderConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("render config degraded to defaults: {}", e);
                RenderConfig::default()
            }
        },
        Err(_) => RenderConfig::default(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let addr = std::env::var("QUANTUM_CELL_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:50051".to_string())
        .parse()?;

    let cell = CellService::new(rng_from_env(), render_config_from_env());

    println!("QuantumCell gRPC server listening on {}", addr);
    println!("Endpoints: Measure / RenderState / RenderFormula");

    tonic::transport::Server::builder()
        .add_service(QuantumCellServer::new(cell))
        .serve(addr)
        .await?;

    Ok(())
}
