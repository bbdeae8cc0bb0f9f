use rochambeau::*;
use tokio::net::TcpListener;

async fn listener() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}

#[tokio::test]
async fn rock_beats_scissors_over_tcp() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let mut host = Host::new(1, Constant(Move::Rock));
    let mut guest = Guest::new(1, Constant(Move::Scissors));
    let (hosted, guested) = tokio::join!(host.serve(&listener), guest.join(addr));
    let hosted = hosted.unwrap();
    let guested = guested.unwrap();
    assert_eq!(i8::from(hosted.rounds[0].outcome), 1);
    assert_eq!(hosted.rounds[0].outcome.winner(), "Me");
    assert_eq!(guested.rounds[0].outcome.winner(), "You");
}

#[tokio::test]
async fn paper_ties_paper_over_tcp() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let mut host = Host::new(1, Constant(Move::Paper));
    let mut guest = Guest::new(1, Constant(Move::Paper));
    let (hosted, guested) = tokio::join!(host.serve(&listener), guest.join(addr));
    assert_eq!(i8::from(hosted.unwrap().rounds[0].outcome), 0);
    assert_eq!(guested.unwrap().rounds[0].outcome.winner(), "Tie");
}

#[tokio::test]
async fn games_bound_the_match() {
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let mut host = Host::new(5, Random::seeded(11));
    let mut guest = Guest::new(5, Random::seeded(12));
    let (hosted, guested) = tokio::join!(host.serve(&listener), guest.join(addr));
    let hosted = hosted.unwrap();
    let guested = guested.unwrap();
    assert_eq!(hosted.played(), 5);
    assert_eq!(guested.played(), 5);
    assert_eq!(hosted.wins + hosted.losses + hosted.ties, 5);
    assert_eq!(hosted.wins, guested.losses);
    let indices = hosted.rounds.iter().map(|r| r.index).collect::<Vec<_>>();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn greeting_is_read_then_discarded() {
    use tokio::io::AsyncBufReadExt;
    use tokio::io::AsyncWriteExt;
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let peer = async move {
        let stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let mut stream = tokio::io::BufReader::new(stream);
        stream.get_mut().write_all(b"ready 99\nscissors\n").await.unwrap();
        let ref mut line = String::new();
        stream.read_line(line).await.unwrap();
        line.trim().to_string()
    };
    let mut host = Host::new(1, Constant(Move::Rock));
    let (hosted, theirs) = tokio::join!(host.serve(&listener), peer);
    assert_eq!(theirs, "rock");
    assert_eq!(hosted.unwrap().to_string(), "1-0-0");
}

#[tokio::test]
async fn invalid_peer_move_is_typed() {
    use tokio::io::AsyncWriteExt;
    let listener = listener().await;
    let addr = listener.local_addr().unwrap();
    let peer = async move {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream.write_all(b"hello 1\nlizard\n").await.unwrap();
        stream
    };
    let mut host = Host::new(1, Constant(Move::Rock));
    let (hosted, _stream) = tokio::join!(host.serve(&listener), peer);
    match hosted {
        Err(SessionError::Move(MoveError::InvalidMove(token))) => assert_eq!(token, "lizard"),
        other => panic!("expected invalid move, got {:?}", other),
    }
}
