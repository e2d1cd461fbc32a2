use crate::adapters::{GeoIpResolver, IpEchoResolver, IssPassPredictor, JsonHttpClient};
use crate::core::{ConfigProvider, GeolocationResolver, IpResolver, PassList, PassPredictor};
use crate::utils::error::Result;
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;

/// 串接流程的狀態；只會往前走，不會回到先前的狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    AwaitingIp,
    AwaitingCoordinates,
    AwaitingPasses,
    Done,
    Failed,
}

impl ChainState {
    /// 目前步驟成功後的下一個狀態；終止狀態保持不變
    pub fn advance(self) -> Self {
        match self {
            ChainState::AwaitingIp => ChainState::AwaitingCoordinates,
            ChainState::AwaitingCoordinates => ChainState::AwaitingPasses,
            ChainState::AwaitingPasses => ChainState::Done,
            terminal => terminal,
        }
    }

    pub fn fail(self) -> Self {
        if self.is_terminal() {
            self
        } else {
            ChainState::Failed
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ChainState::Done | ChainState::Failed)
    }

    pub fn step_name(self) -> &'static str {
        match self {
            ChainState::AwaitingIp => "resolve IP",
            ChainState::AwaitingCoordinates => "resolve coordinates",
            ChainState::AwaitingPasses => "predict passes",
            ChainState::Done => "done",
            ChainState::Failed => "failed",
        }
    }
}

/// 依序執行 IP → 座標 → 過境時間，第一個錯誤原樣回傳
pub struct FlyoverEngine<I: IpResolver, G: GeolocationResolver, P: PassPredictor> {
    ip_resolver: I,
    geolocator: G,
    predictor: P,
}

pub type HttpFlyoverEngine = FlyoverEngine<IpEchoResolver, GeoIpResolver, IssPassPredictor>;

impl<I: IpResolver, G: GeolocationResolver, P: PassPredictor> FlyoverEngine<I, G, P> {
    pub fn new(ip_resolver: I, geolocator: G, predictor: P) -> Self {
        Self {
            ip_resolver,
            geolocator,
            predictor,
        }
    }

    pub async fn get_upcoming_passes(&self) -> Result<PassList> {
        self.run_chain()
            .instrument(tracing::info_span!("upcoming_passes"))
            .await
    }

    async fn run_chain(&self) -> Result<PassList> {
        let mut state = ChainState::AwaitingIp;

        let ip = run_step(&mut state, self.ip_resolver.resolve_my_ip()).await?;
        let coords = run_step(&mut state, self.geolocator.resolve_coordinates(&ip)).await?;
        let passes = run_step(&mut state, self.predictor.predict_passes(&coords)).await?;

        debug_assert_eq!(state, ChainState::Done);
        tracing::info!("✅ Found {} upcoming passes", passes.len());
        Ok(passes)
    }
}

impl HttpFlyoverEngine {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = JsonHttpClient::new(config.request_timeout(), config.user_agent())?;

        Ok(Self::new(
            IpEchoResolver::new(client.clone(), config.ip_endpoint()),
            GeoIpResolver::new(client.clone(), config.geolocation_endpoint()),
            IssPassPredictor::new(client, config.passes_endpoint()),
        ))
    }
}

/// 執行一個步驟並推進狀態；錯誤不包裝
async fn run_step<T, F>(state: &mut ChainState, step: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let name = state.step_name();
    let start = Instant::now();

    match step.await {
        Ok(value) => {
            tracing::debug!("⏱️ {} finished in {:?}", name, start.elapsed());
            *state = state.advance();
            Ok(value)
        }
        Err(e) => {
            tracing::error!("❌ {} failed after {:?}: {}", name, start.elapsed(), e);
            *state = state.fail();
            Err(e)
        }
    }
}

/// 以 HTTP 服務查詢目前位置接下來的 ISS 過境時間
pub async fn next_passes_for_my_location<C: ConfigProvider>(config: &C) -> Result<PassList> {
    HttpFlyoverEngine::from_config(config)?
        .get_upcoming_passes()
        .await
}
